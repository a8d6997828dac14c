// src/screens/schedule.rs
//
// Appointment submission. The customer id arrives as navigation payload and
// is resolved against the API before the form accepts anything.

use std::io::{BufRead, Write};

use chrono::{DateTime, Local};
use log::{error, info, warn};

use crate::app::{Console, Screen, Transition};
use crate::services::SchedulingApi;
use crate::utils::date_utils;
use crate::utils::validation::{validate_schedule, ScheduleForm};

pub async fn run<R: BufRead, W: Write>(
    api: &dyn SchedulingApi,
    console: &mut Console<R, W>,
    customer_id: &str,
) -> anyhow::Result<Transition> {
    console.say("")?;
    console.say("Carregando...")?;
    let customer = match api.get_customer(customer_id).await {
        Ok(Some(customer)) => customer,
        Ok(None) => {
            console.alert("Erro", "Não foi possível encontrar o usuário. Tente novamente.")?;
            return Ok(Transition::Home);
        }
        Err(e) => {
            error!("Erro ao buscar usuário {}: {}", customer_id, e);
            console.alert("Erro", "Não foi possível encontrar o usuário. Tente novamente.")?;
            return Ok(Transition::Home);
        }
    };

    console.say(&format!("Olá, {}!", customer.name))?;
    console.say(&format!("Seu id: {}", customer.id))?;
    console.say("Vamos continuar seu agendamento...")?;

    let mut form = ScheduleForm::default();
    loop {
        console.say("")?;
        console.say(&format!("Data e Hora de Início: {}", selected(&form.starts_at)))?;
        console.say(&format!("Data e Hora de Término: {}", selected(&form.ends_at)))?;
        console.say("[i] escolher início  [t] escolher término  [c] Confirmar Agendamento")?;
        console.say("[m] Meus agendamentos  [v] voltar")?;
        let choice = match console.prompt("Opção")? {
            Some(choice) => choice.to_lowercase(),
            None => return Ok(Transition::Quit),
        };

        match choice.as_str() {
            "i" => {
                form.starts_at = pick_moment(console, "Data e Hora de Início")?.or(form.starts_at)
            }
            "t" => form.ends_at = pick_moment(console, "Data e Hora de Término")?.or(form.ends_at),
            "c" => match validate_schedule(customer_id, &form) {
                Ok(appointment) => match api.create_appointment(&appointment).await {
                    Ok(id) => {
                        info!("appointment criado: {}", id);
                        return Ok(Transition::Push(Screen::MySchedules {
                            customer_id: customer_id.to_string(),
                        }));
                    }
                    Err(e) => {
                        error!("Erro ao criar appointment: {}", e);
                        // the form keeps its values for a manual retry
                        console.alert(
                            "Erro",
                            "Não foi possível criar o agendamento. Tente novamente.",
                        )?;
                    }
                },
                Err(errors) => {
                    for invalid in errors {
                        warn!("validação falhou em {}", invalid.field);
                        console.say(invalid.message)?;
                    }
                }
            },
            "m" => {
                return Ok(Transition::Push(Screen::MySchedules {
                    customer_id: customer_id.to_string(),
                }))
            }
            "v" | "voltar" => return Ok(Transition::Back),
            _ => {}
        }
    }
}

fn selected(moment: &Option<DateTime<Local>>) -> String {
    match moment {
        Some(moment) => date_utils::format_short(moment),
        None => "Selecione".to_string(),
    }
}

/// Reads one moment in the form pattern. The floor is "now", like the date
/// picker of the mobile app; empty input cancels the pick.
fn pick_moment<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    label: &str,
) -> anyhow::Result<Option<DateTime<Local>>> {
    loop {
        console.say(label)?;
        let input = match console.prompt("dd/mm/aaaa hh:mm")? {
            Some(input) => input,
            None => return Ok(None),
        };
        if input.is_empty() {
            return Ok(None);
        }
        match date_utils::parse_form_input(&input) {
            Some(moment) if moment < Local::now() => console.say("Data inválida")?,
            Some(moment) => return Ok(Some(moment)),
            None => console.say("Data inválida")?,
        }
    }
}
