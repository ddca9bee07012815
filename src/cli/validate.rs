use anyhow::Result;
use log::info;

use pqpstat::db::PqpDatabase;
use pqpstat::validator::validate_pqp;

/// Validate PQP schema and decoy consistency
pub fn run(db: &PqpDatabase) -> Result<()> {
    info!("PQP Validator");
    info!("File: {}", db.path().display());

    match validate_pqp(db) {
        Ok(report) => {
            #[cfg(feature = "colorized_output")]
            {
                println!("{}", report.format_colored());
            }

            #[cfg(not(feature = "colorized_output"))]
            {
                println!("{}", report);
            }

            // Exit with error code if validation failed
            if report.has_failures() {
                std::process::exit(1);
            }

            Ok(())
        }
        Err(e) => {
            eprintln!("Validation error: {}", e);
            std::process::exit(1);
        }
    }
}
