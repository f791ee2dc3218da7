//! Login command implementations

use anyhow::{Context, Result};
use bibliotek_client::CatalogClient;
use bibliotek_core::{AdminCredentials, CatalogService, StudentCredentials};

pub fn login_student(
    client: &CatalogClient,
    name: String,
    roll_no: String,
    department: String,
    year: String,
) -> Result<()> {
    let creds = StudentCredentials {
        name,
        roll_no,
        department,
        year,
    };

    let profile = client
        .login_student(&creds)
        .context("Student login failed")?;

    match &profile.department {
        Some(dept) => println!("Logged in as {} ({})", profile.name, dept),
        None => println!("Logged in as {}", profile.name),
    }

    Ok(())
}

pub fn login_admin(client: &CatalogClient, username: String, password: String) -> Result<()> {
    let creds = AdminCredentials { username, password };

    client.login_admin(&creds).context("Admin login failed")?;
    println!("Logged in as administrator");

    Ok(())
}
