// src/screens/my_schedules.rs
//
// Listing. Two independent lookups (customer name, appointments) behind one
// loading line; the screen only renders once both resolved.

use std::io::{BufRead, Write};

use futures::future;
use log::error;

use crate::app::{Console, Transition};
use crate::models::Appointment;
use crate::services::SchedulingApi;
use crate::utils::date_utils;

pub async fn run<R: BufRead, W: Write>(
    api: &dyn SchedulingApi,
    console: &mut Console<R, W>,
    customer_id: &str,
) -> anyhow::Result<Transition> {
    console.say("")?;
    console.say("Carregando...")?;

    let (customer, appointments) = future::join(
        api.get_customer(customer_id),
        api.customer_appointments(customer_id),
    )
    .await;

    let customer = match customer {
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
    let appointments = match appointments {
        Ok(appointments) => appointments,
        Err(e) => {
            // the original renders the empty state when the listing query fails
            error!("Erro ao buscar agendamentos de {}: {}", customer_id, e);
            Vec::new()
        }
    };

    console.say(&format!("Agendamentos de {}", customer.name))?;
    console.say("")?;
    console.say(&render_appointments(&appointments))?;

    loop {
        let choice = match console.prompt("[v] voltar  [s] sair")? {
            Some(choice) => choice.to_lowercase(),
            None => return Ok(Transition::Quit),
        };
        match choice.as_str() {
            "v" | "voltar" => return Ok(Transition::Back),
            "s" | "sair" => return Ok(Transition::Quit),
            _ => {}
        }
    }
}

/// One card per appointment, in the order the API returned them.
pub fn render_appointments(appointments: &[Appointment]) -> String {
    if appointments.is_empty() {
        return "Nenhum agendamento encontrado".to_string();
    }
    let mut cards = Vec::new();
    for appointment in appointments {
        cards.push(format!(
            "Id de agendamento: {}\nInício: {}\nFim: {}",
            appointment.id,
            date_utils::format_card(&appointment.starts_at),
            date_utils::format_card(&appointment.ends_at),
        ));
    }
    cards.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn appointment(id: &str, start_hour: u32) -> Appointment {
        Appointment {
            id: id.to_string(),
            starts_at: Local
                .with_ymd_and_hms(2025, 1, 1, start_hour, 0, 0)
                .unwrap(),
            ends_at: Local
                .with_ymd_and_hms(2025, 1, 1, start_hour + 1, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn empty_listing_is_exactly_the_empty_state() {
        assert_eq!(render_appointments(&[]), "Nenhum agendamento encontrado");
    }

    #[test]
    fn renders_one_card_per_appointment_in_order() {
        let rendered = render_appointments(&[appointment("a1", 10), appointment("a2", 14)]);
        assert_eq!(rendered.matches("Id de agendamento:").count(), 2);
        assert_eq!(rendered.matches("Início:").count(), 2);
        assert_eq!(rendered.matches("Fim:").count(), 2);
        assert!(rendered.find("a1").unwrap() < rendered.find("a2").unwrap());
        assert!(!rendered.contains("Nenhum agendamento encontrado"));
    }

    #[test]
    fn cards_spell_the_times_out_in_pt_br() {
        let rendered = render_appointments(&[appointment("a1", 10)]);
        assert!(rendered.contains("1 de janeiro às 10:00"), "got {rendered}");
        assert!(rendered.contains("1 de janeiro às 11:00"), "got {rendered}");
    }
}
