//! Stats command implementation

use anyhow::{Context, Result};
use bibliotek_client::CatalogClient;

/// Show the admin dashboard aggregates
pub fn stats(client: &CatalogClient, json: bool) -> Result<()> {
    let stats = client
        .admin_stats()
        .context("Failed to load admin statistics")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("Total logins: {}", stats.total_logins);

    if !stats.dept_wise_logins.is_empty() {
        println!("\nLogins by department:");
        for (department, count) in &stats.dept_wise_logins {
            println!("  {:<28} {}", department, count);
        }
    }

    if !stats.student_usage.is_empty() {
        println!("\nReading sessions:");
        for usage in &stats.student_usage {
            let date = usage.date.as_deref().unwrap_or("-");
            println!("  {:<20} {:>6.0} min  {}", usage.name, usage.duration, date);
        }
    }

    Ok(())
}
