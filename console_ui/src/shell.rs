use std::io::{self, BufRead, Write};

use sim_core::{ConfigForm, LaunchMode};

use crate::render;
use crate::session::Session;

/// One parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Run,
    Clear,
    Set { field: String, value: String },
    Mode(LaunchMode),
    Show,
    Help,
    Quit,
    Unknown(String),
}

fn parse_command(line: &str) -> Option<Command> {
    let mut words = line.split_whitespace();
    let head = words.next()?;

    let command = match head {
        "run" | "start" => Command::Run,
        "clear" => Command::Clear,
        "set" => match (words.next(), words.next()) {
            (Some(field), Some(value)) => Command::Set {
                field: field.to_string(),
                value: value.to_string(),
            },
            _ => Command::Unknown("set needs a field and a value".to_string()),
        },
        "mode" => match words.next() {
            Some("oblique") => Command::Mode(LaunchMode::Oblique),
            Some("horizontal") => Command::Mode(LaunchMode::Horizontal),
            _ => Command::Unknown("mode is oblique or horizontal".to_string()),
        },
        "show" => Command::Show,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => Command::Unknown(format!("unknown command: {}", other)),
    };
    Some(command)
}

const HELP: &str = "\
commands:
  run                      launch with the current parameters
  clear                    clear the accumulated trail
  set <field> <value>      field: radius, speed, angle, gravity, drag
  mode <oblique|horizontal>
  show                     print the current parameters
  quit";

/// Interactive parameter loop: enter launch parameters, start runs, clear
/// the trail, quit.
pub fn run_shell(step_rate: Option<u32>) {
    let mut form = ConfigForm::default();
    let config = form.validate().expect("default parameters are valid");
    let mut session = Session::new(config);

    println!("{}", HELP);

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(err) => {
                log::error!("stdin read failed: {}", err);
                break;
            }
        }

        let command = match parse_command(&line) {
            Some(command) => command,
            None => continue, // blank line
        };

        match command {
            Command::Run => match form.validate() {
                Ok(config) => {
                    session.relaunch(config);
                    let summary = session.drive(step_rate);
                    print!("{}", render::render_frame(&session));
                    println!(
                        "landed after {} steps ({:.2} simulated seconds) at x = {:.2}",
                        summary.steps, summary.sim_seconds, summary.impact_pos.x
                    );
                }
                Err(err) => println!("{}", err),
            },
            Command::Clear => {
                session.clear_trail();
                println!("trail cleared");
            }
            Command::Set { field, value } => match apply_set(&mut form, &field, value) {
                Ok(()) => println!("{} set", field),
                Err(message) => println!("{}", message),
            },
            Command::Mode(mode) => {
                form.mode = mode;
                println!("mode set");
            }
            Command::Show => print_form(&form),
            Command::Help => println!("{}", HELP),
            Command::Quit => break,
            Command::Unknown(message) => println!("{}", message),
        }
    }
}

/// Stage a raw value into the form, but only if the whole form still
/// validates; a rejected field never leaves a half-applied config behind.
fn apply_set(form: &mut ConfigForm, field: &str, value: String) -> Result<(), String> {
    let mut staged = form.clone();
    match field {
        "radius" => staged.radius = value,
        "speed" => staged.speed = value,
        "angle" => staged.angle_deg = value,
        "gravity" => staged.gravity = value,
        "drag" => staged.drag = value,
        other => return Err(format!("unknown field: {}", other)),
    }

    match staged.validate() {
        Ok(_) => {
            *form = staged;
            Ok(())
        }
        Err(err) => Err(err.to_string()),
    }
}

fn print_form(form: &ConfigForm) {
    println!("radius  = {}", form.radius);
    println!("speed   = {}", form.speed);
    println!("angle   = {}", form.angle_deg);
    println!("gravity = {}", form.gravity);
    println!("drag    = {}", form.drag);
    println!("mode    = {:?}", form.mode);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_and_aliases() {
        assert_eq!(parse_command("run"), Some(Command::Run));
        assert_eq!(parse_command("start"), Some(Command::Run));
        assert_eq!(parse_command("  run  "), Some(Command::Run));
    }

    #[test]
    fn test_parse_blank_line_is_none() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("   "), None);
    }

    #[test]
    fn test_parse_set() {
        assert_eq!(
            parse_command("set gravity 1.6"),
            Some(Command::Set {
                field: "gravity".to_string(),
                value: "1.6".to_string()
            })
        );
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!(
            parse_command("mode horizontal"),
            Some(Command::Mode(LaunchMode::Horizontal))
        );
        assert!(matches!(parse_command("mode sideways"), Some(Command::Unknown(_))));
    }

    #[test]
    fn test_apply_set_rejects_bad_value_and_keeps_form() {
        let mut form = ConfigForm::default();
        let before = form.radius.clone();

        let result = apply_set(&mut form, "radius", "-2".to_string());

        assert!(result.is_err());
        assert_eq!(form.radius, before, "Rejected input must not stick");
    }

    #[test]
    fn test_apply_set_accepts_lenient_drag() {
        let mut form = ConfigForm::default();
        let result = apply_set(&mut form, "drag", "abc".to_string());
        assert!(result.is_ok(), "Malformed drag degrades to zero, not an error");
        assert_eq!(form.drag, "abc");
    }

    #[test]
    fn test_apply_set_unknown_field() {
        let mut form = ConfigForm::default();
        assert!(apply_set(&mut form, "spin", "3".to_string()).is_err());
    }
}
