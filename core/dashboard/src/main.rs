mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::process;

use cli::{config_to_command, parse_args, print_completion, ParseOutcome};
use common::error::Error;
use common::ports::outbound::{LogLevel, LogRecord};
use domain::Command;
use ports::inbound::UseCaseRunner;
use usecase::CheckReport;
use wiring::{wire_dashboard, App};

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl UseCaseRunner for Runner {
    fn run(&self, command: Command) -> Result<i32, Error> {
        let command_name = command.name();
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "command started")
                .layer("cli")
                .kind("lifecycle")
                .field("command", command_name),
        );

        let uc = &self.app.dashboard_use_case;
        let result = match command {
            Command::Help => {
                print_help();
                Ok(0)
            }
            Command::Render { source, out, nav } => uc
                .render(&source, &nav)
                .and_then(|page| {
                    uc.write_document(&out, &page.document)?;
                    match page.load_error {
                        // エラーページは書き出した上で失敗として終わる
                        Some(e) => Err(e.into()),
                        None => Ok(0),
                    }
                }),
            Command::Check { source } => uc.check(&source).map(|report| {
                print_report(&report);
                0
            }),
        };

        let code = match &result {
            Ok(code) => *code,
            Err(e) => e.exit_code(),
        };
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "command finished")
                .layer("cli")
                .kind("lifecycle")
                .field("command", command_name)
                .field("exit_code", code),
        );
        if let Err(ref e) = result {
            let _ = self.app.logger.log(
                &LogRecord::new(LogLevel::Error, e.to_string())
                    .layer("cli")
                    .kind("error"),
            );
        }
        result
    }
}

fn print_report(report: &CheckReport) {
    println!("source:   {}", report.source);
    println!("agents:   {}", report.agents);
    println!("statuses: {}", report.statuses);
    println!("projects: {}", report.projects);
    println!("logs:     {}", report.logs);
    println!("built at: {}", report.built_at);
    for (project, agent) in &report.dangling {
        eprintln!(
            "warning: project '{}' references unknown agent '{}'",
            project, agent
        );
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("dashboard: {}", e);
            if e.is_usage() {
                print_usage();
            }
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    let app = wire_dashboard();
    let command = config_to_command(&config, app.env_resolver.data_location_from_env())?;
    let runner = Runner { app };
    runner.run(command)
}

fn print_usage() {
    eprintln!("Usage: dashboard [options] [render|check|help] [command options]");
}

fn print_help() {
    println!("Usage: dashboard [options] [render|check|help] [command options]");
    println!();
    println!("Renders a static agent dashboard from agents.json, status.json and projects.json.");
    println!();
    println!("Options:");
    println!("  -h, --help                Show this help message");
    println!("  -D, --data-dir <dir>      Read the data files from a directory (default: ./data)");
    println!("  -u, --base-url <url>      Fetch the data files from an HTTP(S) base URL");
    println!("      --generate <shell>    Print a completion script (bash, zsh, fish)");
    println!();
    println!("Commands:");
    println!("  render (default)          Write the dashboard page");
    println!("    -o, --out <file>        Output file (default: index.html, '-' for stdout)");
    println!("    -a, --agent <id>        Open the detail panel of an agent");
    println!("    -t, --tab <tab>         agents-md | soul-md | memory (requires --agent)");
    println!("    -s, --section <name>    agents | projects | logs");
    println!("  check                     Report counts and projects with unknown agents");
    println!("  help                      Show this help message");
    println!();
    println!("Environment:");
    println!("  DASHBOARD_DATA            Data directory or base URL when no option is given");
    println!("  DASHBOARD_HOME            Home for state (default: $XDG_CONFIG_HOME/agent-dashboard)");
    println!("  DASHBOARD_LOG_FILE        JSONL log file (default: <home>/state/logs/dashboard.jsonl)");
}
