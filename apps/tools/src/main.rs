use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use directory::{default_seed, load_seed, DirectoryController};
use shared::{
    domain::{DepartmentFilter, Employee},
    format::{format_hire_date, format_salary, DEFAULT_CURRENCY_SYMBOL, DEFAULT_DATE_FORMAT},
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "directory-tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print employees matching a search term and department.
    List {
        #[arg(long)]
        seed: Option<PathBuf>,
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value = "all")]
        department: String,
        #[arg(long, default_value = DEFAULT_CURRENCY_SYMBOL)]
        currency: String,
        #[arg(long, default_value = DEFAULT_DATE_FORMAT)]
        date_format: String,
    },
    /// Validate a seed file and report how many employees it holds.
    CheckSeed { path: PathBuf },
    /// Print the built-in seed as JSON.
    PrintSeed,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    match cli.command {
        Command::List {
            seed,
            search,
            department,
            currency,
            date_format,
        } => {
            let filter: DepartmentFilter = department
                .parse()
                .with_context(|| format!("invalid --department '{department}'"))?;
            let controller = DirectoryController::new(seed_employees(seed.as_deref())?);
            let rows = controller.list(&search, filter);
            println!("{} employee(s)", rows.len());
            for employee in rows {
                println!("{}", format_row(employee, &currency, &date_format));
            }
        }
        Command::CheckSeed { path } => {
            let employees = load_seed(&path)?;
            println!(
                "{}: {} employee(s), next id {}",
                path.display(),
                employees.len(),
                DirectoryController::new(employees).next_id()
            );
        }
        Command::PrintSeed => {
            println!("{}", serde_json::to_string_pretty(&default_seed())?);
        }
    }

    Ok(())
}

fn seed_employees(path: Option<&Path>) -> Result<Vec<Employee>> {
    match path {
        Some(path) => Ok(load_seed(path)?),
        None => Ok(default_seed()),
    }
}

fn format_row(employee: &Employee, currency: &str, date_format: &str) -> String {
    format!(
        "#{} {} [{}] {} | {} | {} | hired {}",
        employee.id,
        employee.full_name(),
        employee.department,
        employee.email,
        employee.job_title,
        format_salary(employee.salary, currency),
        format_hire_date(employee.hire_date, date_format),
    )
}
