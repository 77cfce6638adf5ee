use anyhow::{Context, Result, anyhow};
use appointments_view::api::{AppointmentsApi, HttpAppointmentsApi};
use appointments_view::config::Config;
use appointments_view::confirm::{Confirm, StdinConfirm};
use appointments_view::models::{AppointmentId, EditField};
use appointments_view::{AppointmentsView, Outcome};
use std::io::{self, BufRead, Write};

const HELP: &str = "\
commands:
  list                  show the appointments again
  reload                fetch the list from the backend
  edit <id>             open the edit form for a row
  set <field> <value>   change a field of the open form
  save                  submit the open form
  cancel                close the open form
  delete <id>           remove an appointment
  doctors <department>  list available doctors
  help                  this text
  quit";

enum Command {
    List,
    Reload,
    Edit(AppointmentId),
    Set(EditField, String),
    Save,
    Cancel,
    Delete(AppointmentId),
    Doctors(String),
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Command> {
    let line = line.trim();
    let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();

    let id = |rest: &str| -> Result<AppointmentId> {
        rest.parse()
            .with_context(|| format!("'{}' is not an appointment id", rest))
    };

    Ok(match verb {
        "list" | "" => Command::List,
        "reload" => Command::Reload,
        "edit" => Command::Edit(id(rest)?),
        "set" => {
            let (field, value) = rest.split_once(' ').unwrap_or((rest, ""));
            Command::Set(field.parse()?, value.trim().to_string())
        }
        "save" => Command::Save,
        "cancel" => Command::Cancel,
        "delete" => Command::Delete(id(rest)?),
        "doctors" if !rest.is_empty() => Command::Doctors(rest.to_string()),
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(anyhow!("unknown command '{}', try help", other)),
    })
}

async fn run<A: AppointmentsApi, C: Confirm>(view: &mut AppointmentsView<A, C>) -> Result<()> {
    view.mount().await;
    print!("{}", view.render());

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(());
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match command {
            Command::List => {}
            Command::Reload => view.reload().await,
            Command::Edit(id) => {
                if let Err(e) = view.start_edit(id) {
                    println!("{}", e);
                    continue;
                }
            }
            Command::Set(field, value) => {
                if let Err(e) = view.change_field(field, &value) {
                    println!("{}", e);
                }
            }
            Command::Save => match view.save_edit().await {
                Ok(Outcome::Failed) => println!("save failed, the form is still open"),
                Ok(_) => {}
                Err(e) => println!("{}", e),
            },
            Command::Cancel => view.cancel_edit(),
            Command::Delete(id) => {
                if view.delete(id).await == Outcome::Declined {
                    continue;
                }
            }
            Command::Doctors(department) => {
                match view.doctors_by_department(&department).await {
                    Ok(doctors) if doctors.is_empty() => {
                        println!("no doctors available in {}", department)
                    }
                    Ok(doctors) => {
                        for doctor in doctors {
                            println!("  {:>4}  {}", doctor.id, doctor.full_name);
                        }
                    }
                    Err(e) => println!("{}", e),
                }
                continue;
            }
            Command::Help => {
                println!("{}", HELP);
                continue;
            }
            Command::Quit => return Ok(()),
        }

        print!("{}", view.render());
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let config = Config::from_env().context("Failed to load backend configuration")?;
    tracing::info!("using backend at {}", config.api_url());

    let mut view = AppointmentsView::new(HttpAppointmentsApi::new(config), StdinConfirm);
    run(&mut view).await
}
