use std::collections::HashMap;

use uuid::Uuid;

use crate::model::attendance::AttendanceRecord;
use crate::model::member::Member;
use crate::time::format_day;

pub const CSV_HEADER: &str = "date,member_id,member_name,is_present";

fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Renders the full history as CSV, oldest day first.
pub fn to_csv(records: &[AttendanceRecord], members: &[Member]) -> String {
    let names: HashMap<Uuid, &str> = members.iter().map(|m| (m.id, m.name.as_str())).collect();

    let mut sorted: Vec<&AttendanceRecord> = records.iter().collect();
    sorted.sort_by_key(|r| r.date);

    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for record in sorted {
        let name = names.get(&record.member_id).copied().unwrap_or("Unknown");
        out.push_str(&format!(
            "{},{},{},{}\n",
            format_day(record.date),
            record.member_id,
            escape_field(name),
            if record.is_present { '1' } else { '0' }
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_csv_orders_escapes_and_labels_unknown() {
        let mut quoted = Member::new("Smith, \"Doc\"".to_string());
        quoted.id = Uuid::nil();
        let stranger = Uuid::new_v4();
        let records = vec![
            AttendanceRecord::new(stranger, NaiveDate::from_ymd_opt(2025, 3, 2).unwrap(), false),
            AttendanceRecord::new(quoted.id, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(), true),
        ];

        let csv = to_csv(&records, &[quoted]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(
            lines[1],
            "2025-03-01,00000000-0000-0000-0000-000000000000,\"Smith, \"\"Doc\"\"\",1"
        );
        assert_eq!(lines[2], format!("2025-03-02,{},Unknown,0", stranger));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_empty_history_is_header_only() {
        assert_eq!(to_csv(&[], &[]), format!("{}\n", CSV_HEADER));
    }
}
