use crate::db::{PqpDatabase, PqpError, REQUIRED_COLUMNS, REQUIRED_TABLES};

use super::{ValidationCheck, ValidationReport};

pub(super) fn check_tables(db: &PqpDatabase, report: &mut ValidationReport) -> Result<(), PqpError> {
    let mut missing = Vec::new();
    for table in REQUIRED_TABLES {
        if !db.has_table(table)? {
            missing.push(table);
        }
    }

    if missing.is_empty() {
        report.add_check(ValidationCheck::ok("Required tables present"));
    } else {
        report.add_check(ValidationCheck::failed(
            "Required tables present",
            format!("missing table(s): {}", missing.join(", ")),
        ));
    }
    Ok(())
}

/// One check per table; missing tables are reported by `check_tables` only
pub(super) fn check_columns(db: &PqpDatabase, report: &mut ValidationReport) -> Result<(), PqpError> {
    for (table, required) in REQUIRED_COLUMNS {
        let present = db.table_columns(table)?;
        if present.is_empty() {
            continue;
        }

        let missing: Vec<&str> = required
            .iter()
            .copied()
            .filter(|column| !present.iter().any(|p| p.as_str() == *column))
            .collect();

        let name = format!("Columns of {}", table);
        if missing.is_empty() {
            report.add_check(ValidationCheck::ok(name));
        } else {
            report.add_check(ValidationCheck::failed(
                name,
                format!("missing column(s): {}", missing.join(", ")),
            ));
        }
    }
    Ok(())
}
