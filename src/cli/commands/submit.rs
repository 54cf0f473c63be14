use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::submit::SubmitLogic;
use crate::errors::{AppError, AppResult};
use crate::models::{AdminInfo, HotelInfo, RoomEntry, Session};
use crate::notify::{Notifier, SmtpNotifier};
use crate::store::LogStore;
use crate::ui::messages::{success, warning};
use crate::utils::date;
use crate::utils::path::expand_tilde;
use serde::Deserialize;
use std::fs;
use tracing::warn;

/// A whole form, as read from `--from-file` or assembled from flags.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Submission {
    pub hotel: HotelInfo,
    #[serde(default)]
    pub admin: AdminInfo,
    pub rooms: Vec<RoomEntry>,
}

impl Submission {
    pub fn from_yaml(content: &str) -> AppResult<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| AppError::Validation(format!("invalid submission file: {e}")))
    }

    /// Bring every date to the stored `MM/DD/YYYY` form; an empty
    /// preparation date becomes today.
    pub fn normalized(mut self) -> AppResult<Self> {
        self.admin.date_prepared = if self.admin.date_prepared.trim().is_empty() {
            date::to_stored(date::today())
        } else {
            date::normalize(&self.admin.date_prepared)?
        };

        for room in &mut self.rooms {
            room.check_in = date::normalize(&room.check_in)?;
            room.check_out = date::normalize(&room.check_out)?;

            if let (Some(i), Some(o)) = (
                date::parse_date(&room.check_in),
                date::parse_date(&room.check_out),
            ) && o < i
            {
                warn!(
                    room = %room.room_number,
                    check_in = %room.check_in,
                    check_out = %room.check_out,
                    "check-out is before check-in"
                );
            }
        }
        Ok(self)
    }
}

/// Parse `ROOM,DAY,NIGHT,CHECKIN,CHECKOUT[,COST]`.
pub fn parse_room(value: &str) -> AppResult<RoomEntry> {
    let parts: Vec<&str> = value.split(',').map(str::trim).collect();
    if !(5..=6).contains(&parts.len()) {
        return Err(AppError::Validation(format!(
            "room '{value}' must be ROOM,DAY,NIGHT,CHECKIN,CHECKOUT[,COST]"
        )));
    }

    let actual_cost = match parts.get(5) {
        Some(c) if !c.is_empty() => Some(parse_amount(c).ok_or_else(|| {
            AppError::Validation(format!("room '{}': invalid cost '{c}'", parts[0]))
        })?),
        _ => None,
    };

    Ok(RoomEntry {
        room_number: parts[0].to_string(),
        employee_day: parts[1].to_string(),
        employee_night: parts[2].to_string(),
        check_in: parts[3].to_string(),
        check_out: parts[4].to_string(),
        actual_cost,
    })
}

fn parse_amount(s: &str) -> Option<f64> {
    s.trim_start_matches('$').parse().ok()
}

/// Employee view: save the form, then optionally e-mail a summary.
pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    if let Commands::Submit {
        from_file,
        hotel_name,
        hotel_address,
        hotel_phone,
        hotel_contact,
        confirmation,
        nightly_rate,
        rooms,
        prepared_by,
        date_prepared,
        job_number,
        notify,
    } = cmd
    {
        let submission = match from_file {
            Some(f) => {
                let path = expand_tilde(f);
                let content = fs::read_to_string(&path).map_err(|e| {
                    AppError::Validation(format!("cannot read {}: {e}", path.display()))
                })?;
                Submission::from_yaml(&content)?
            }
            None => Submission {
                hotel: HotelInfo {
                    name: hotel_name.clone().unwrap_or_default(),
                    address: hotel_address.clone().unwrap_or_default(),
                    phone: hotel_phone.clone().unwrap_or_default(),
                    contact: hotel_contact.clone().unwrap_or_default(),
                    confirmation: confirmation.clone().unwrap_or_default(),
                    nightly_rate: *nightly_rate,
                },
                admin: AdminInfo {
                    prepared_by: prepared_by.clone().unwrap_or_default(),
                    date_prepared: date_prepared.clone().unwrap_or_default(),
                    job_number: job_number.clone().unwrap_or_default(),
                },
                rooms: rooms
                    .iter()
                    .map(|r| parse_room(r))
                    .collect::<AppResult<Vec<_>>>()?,
            },
        }
        .normalized()?;

        let store = LogStore::new(cfg.log_path());
        let mailer = SmtpNotifier::new();
        let notifier: Option<&dyn Notifier> =
            (*notify || cfg.notify_on_submit).then_some(&mailer as &dyn Notifier);

        let outcome = SubmitLogic::apply(
            &store,
            session,
            &submission.hotel,
            &submission.admin,
            &submission.rooms,
            notifier,
        )?;

        success(format!(
            "Entry saved successfully! {} room(s) logged for {} ({} rows in log)",
            outcome.rows_written, outcome.summary.hotel_name, outcome.total_rows
        ));

        match outcome.notification {
            Some(Ok(())) => success("Summary e-mail sent."),
            Some(Err(e)) => warning(format!(
                "Entry saved, but the summary e-mail was not sent: {e}"
            )),
            None => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_with_cost() {
        let r = parse_room("101, Ana, Bo, 2025-03-01, 2025-03-04, $250.5").unwrap();
        assert_eq!(r.room_number, "101");
        assert_eq!(r.employee_night, "Bo");
        assert_eq!(r.actual_cost, Some(250.5));
    }

    #[test]
    fn room_without_cost() {
        let r = parse_room("7,Ana,,03/01/2025,03/02/2025").unwrap();
        assert_eq!(r.employee_night, "");
        assert_eq!(r.actual_cost, None);
    }

    #[test]
    fn room_with_too_few_fields() {
        assert!(matches!(parse_room("101,Ana"), Err(AppError::Validation(_))));
    }

    #[test]
    fn room_with_bad_cost() {
        assert!(matches!(
            parse_room("101,Ana,Bo,2025-03-01,2025-03-04,lots"),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn yaml_submission_is_normalized() {
        let yaml = r#"
hotel:
  name: Sunrise Inn
  nightly_rate: 89.0
admin:
  prepared_by: Pat
  date_prepared: 2025-03-05
  job_number: J-7
rooms:
  - room_number: "101"
    employee_day: Ana
    check_in: 2025-03-01
    check_out: 2025-03-04
"#;
        let s = Submission::from_yaml(yaml).unwrap().normalized().unwrap();
        assert_eq!(s.hotel.name, "Sunrise Inn");
        assert_eq!(s.admin.date_prepared, "03/05/2025");
        assert_eq!(s.rooms[0].check_in, "03/01/2025");
        assert_eq!(s.rooms[0].employee_night, "");
    }

    #[test]
    fn missing_date_prepared_defaults_to_today() {
        let s = Submission::default().normalized().unwrap();
        assert_eq!(s.admin.date_prepared, date::to_stored(date::today()));
    }
}
