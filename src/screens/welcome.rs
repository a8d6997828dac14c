// src/screens/welcome.rs
//
// Identity resolution: register with a name (the server mints the id) or
// type a previously issued id.

use std::io::{BufRead, Write};

use log::{error, info};

use crate::app::{Console, Screen, Transition};
use crate::services::SchedulingApi;
use crate::utils::validation::{validate_customer_id, validate_name};

pub async fn run<R: BufRead, W: Write>(
    api: &dyn SchedulingApi,
    console: &mut Console<R, W>,
) -> anyhow::Result<Transition> {
    console.say("")?;
    console.say("Bem-vindo(a)!")?;
    console.say("Organize seus agendamentos de forma rápida e fácil.")?;

    loop {
        console.say("")?;
        console.say("[1] Cadastrar com seu nome")?;
        console.say("[2] Já possui cadastro? Digite seu id abaixo")?;
        console.say("[s] Sair")?;
        let choice = match console.prompt("Opção")? {
            Some(choice) => choice.to_lowercase(),
            None => return Ok(Transition::Quit),
        };

        match choice.as_str() {
            "1" => {
                let input = match console.prompt("Digite seu nome")? {
                    Some(input) => input,
                    None => return Ok(Transition::Quit),
                };
                let name = match validate_name(&input) {
                    Ok(name) => name,
                    Err(invalid) => {
                        console.say(invalid.message)?;
                        continue;
                    }
                };
                match api.create_customer(&name).await {
                    Ok(customer) => {
                        info!("user criado: {}", customer.id);
                        return Ok(Transition::Push(Screen::Schedule {
                            customer_id: customer.id,
                        }));
                    }
                    Err(e) => {
                        error!("Erro ao criar usuário: {}", e);
                        console
                            .alert("Erro", "Não foi possível criar o usuário. Tente novamente.")?;
                    }
                }
            }
            "2" => {
                let input = match console.prompt("Digite seu id")? {
                    Some(input) => input,
                    None => return Ok(Transition::Quit),
                };
                match validate_customer_id(&input) {
                    // no lookup here; a bad id is caught by the next screen
                    Ok(customer_id) => {
                        return Ok(Transition::Push(Screen::Schedule { customer_id }))
                    }
                    Err(invalid) => console.say(invalid.message)?,
                }
            }
            "s" | "sair" => return Ok(Transition::Quit),
            _ => {}
        }
    }
}
