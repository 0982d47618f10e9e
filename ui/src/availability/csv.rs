//! Availability rows from the published spreadsheet export.
//!
//! Four columns: start date, end date, price, status. Rows missing any of
//! the first three are skipped; rows whose dates or price do not parse are
//! rejected individually and never fail the whole listing.

use time::{macros::format_description, Date};
use tracing::warn;

use crate::core::error::{RowError, RowErrorReason};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Disponible,
    Complet,
    Reserve,
    /// Free text the sheet owner typed that we do not recognise.
    Other(String),
}

impl Status {
    /// Case-insensitive, accents optional; blank means available.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Status::Disponible;
        }
        let folded: String = trimmed
            .to_lowercase()
            .chars()
            .map(|c| match c {
                'é' | 'è' | 'ê' => 'e',
                other => other,
            })
            .collect();
        match folded.as_str() {
            "disponible" => Status::Disponible,
            "complet" => Status::Complet,
            "reserve" => Status::Reserve,
            _ => Status::Other(trimmed.to_string()),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Status::Disponible)
    }

    /// Modifier class used by the stylesheet.
    pub fn css_class(&self) -> &'static str {
        match self {
            Status::Disponible => "disponible",
            Status::Complet => "complet",
            Status::Reserve => "reserve",
            Status::Other(_) => "autre",
        }
    }

    /// Translation key for recognised statuses.
    pub fn label_key(&self) -> Option<&'static str> {
        match self {
            Status::Disponible => Some("availability.status.disponible"),
            Status::Complet => Some("availability.status.complet"),
            Status::Reserve => Some("availability.status.reserve"),
            Status::Other(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityRecord {
    pub start: Date,
    pub end: Date,
    pub price: u32,
    pub status: Status,
}

impl AvailabilityRecord {
    pub fn is_available(&self) -> bool {
        self.status.is_available()
    }
}

/// Parsed listing plus the rows that had to be rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailabilitySheet {
    pub records: Vec<AvailabilityRecord>,
    pub rejected: Vec<RowError>,
}

impl AvailabilitySheet {
    pub fn available(&self) -> impl Iterator<Item = &AvailabilityRecord> {
        self.records.iter().filter(|r| r.is_available())
    }
}

fn parse_date(raw: &str) -> Option<Date> {
    Date::parse(raw, format_description!("[year]-[month]-[day]")).ok()
}

/// Parse the CSV export. The first line is treated as a header only when
/// its first field is not a date, so header-less exports lose no data.
pub fn parse_sheet(csv: &str) -> AvailabilitySheet {
    let mut sheet = AvailabilitySheet::default();
    for (idx, line) in csv.lines().enumerate() {
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        let field = |i: usize| fields.get(i).copied().unwrap_or("");

        if idx == 0 && parse_date(field(0)).is_none() {
            continue;
        }
        let (start, end, price, status) = (field(0), field(1), field(2), field(3));
        if start.is_empty() || end.is_empty() || price.is_empty() {
            continue;
        }

        match parse_row(start, end, price, status) {
            Ok(record) => sheet.records.push(record),
            Err(reason) => {
                let err = RowError {
                    line: line_no,
                    reason,
                };
                warn!("rejected availability row: {err}");
                sheet.rejected.push(err);
            }
        }
    }
    sheet
}

fn parse_row(start: &str, end: &str, price: &str, status: &str) -> Result<AvailabilityRecord, RowErrorReason> {
    let start_date = parse_date(start).ok_or_else(|| RowErrorReason::StartDate(start.to_string()))?;
    let end_date = parse_date(end).ok_or_else(|| RowErrorReason::EndDate(end.to_string()))?;
    let price = price
        .parse::<u32>()
        .map_err(|_| RowErrorReason::Price(price.to_string()))?;
    Ok(AvailabilityRecord {
        start: start_date,
        end: end_date,
        price,
        status: Status::parse(status),
    })
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    #[test]
    fn blank_rows_dropped_and_statuses_kept() {
        let sheet = parse_sheet(
            "2025-06-15,2025-06-22,2890,Disponible\n2025-07-13,2025-07-20,3490,Complet\n,,,",
        );
        assert_eq!(sheet.records.len(), 2);
        assert!(sheet.rejected.is_empty());
        assert_eq!(sheet.records[1].status, Status::Complet);
        let available: Vec<_> = sheet.available().collect();
        assert_eq!(available.len(), 1);
        assert_eq!(available[0].start, date!(2025 - 06 - 15));
    }

    #[test]
    fn header_line_is_skipped() {
        let sheet = parse_sheet("Date début,Date fin,Prix,Statut\n2025-08-10,2025-08-17,3190,Réservé\n");
        assert_eq!(sheet.records.len(), 1);
        assert_eq!(sheet.records[0].status, Status::Reserve);
        assert_eq!(sheet.records[0].price, 3190);
    }

    #[test]
    fn blank_status_defaults_to_available() {
        let sheet = parse_sheet("2025-06-29,2025-07-06,3190,\n2025-08-24,2025-08-31,2890");
        assert_eq!(sheet.records.len(), 2);
        assert!(sheet.records.iter().all(AvailabilityRecord::is_available));
    }

    #[test]
    fn malformed_price_rejects_only_that_row() {
        let sheet = parse_sheet(
            "Début,Fin,Prix,Statut\n2025-06-15,2025-06-22,deux mille,Disponible\n2025-07-27,2025-08-03,3490,disponible\r\n",
        );
        assert_eq!(sheet.records.len(), 1);
        assert_eq!(
            sheet.rejected,
            vec![RowError {
                line: 2,
                reason: RowErrorReason::Price("deux mille".into())
            }]
        );
    }

    #[test]
    fn bad_dates_are_rejected() {
        let sheet = parse_sheet("2025-06-15,2025-06-22,1,x\n2025-13-01,2025-06-22,1,x\n2025-06-01,juin,1,x");
        assert_eq!(sheet.records.len(), 1);
        assert!(matches!(sheet.rejected[0].reason, RowErrorReason::StartDate(_)));
        assert!(matches!(sheet.rejected[1].reason, RowErrorReason::EndDate(_)));
    }

    #[test]
    fn status_parsing_is_lenient() {
        assert_eq!(Status::parse("COMPLET"), Status::Complet);
        assert_eq!(Status::parse("reserve"), Status::Reserve);
        assert_eq!(Status::parse("  "), Status::Disponible);
        assert_eq!(Status::parse("Sur demande"), Status::Other("Sur demande".into()));
        assert!(!Status::parse("Sur demande").is_available());
        assert_eq!(Status::Reserve.css_class(), "reserve");
    }
}
