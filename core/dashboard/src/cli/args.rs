use crate::domain::{Command, DataLocation, DetailTab, NavRequest, OutputTarget, Section};
use clap::builder::{ArgAction, PossibleValuesParser};
use clap::value_parser;
use clap_complete::Shell;
use common::error::Error;

/// CLI から受け取った生の設定（値は文字列のまま保持）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub help: bool,
    /// -D / --data-dir: データディレクトリ
    pub data_dir: Option<String>,
    /// -u / --base-url: HTTP(S) のベース URL
    pub base_url: Option<String>,
    /// コマンド名（None の場合は render）
    pub command_name: Option<String>,
    /// render -o / --out（"-" は標準出力）
    pub out: Option<String>,
    /// render -a / --agent: 詳細パネルを開くエージェント id
    pub agent: Option<String>,
    /// render -t / --tab
    pub tab: Option<String>,
    /// render -s / --section
    pub section: Option<String>,
}

/// 解析結果: 通常の Config または補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn global_args(cmd: clap::Command) -> clap::Command {
    cmd.disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Print help")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("data-dir")
                .short('D')
                .long("data-dir")
                .value_name("directory")
                .help("Read agents.json / status.json / projects.json from a directory")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("base-url")
                .short('u')
                .long("base-url")
                .value_name("url")
                .help("Fetch agents.json / status.json / projects.json from a base URL")
                .conflicts_with("data-dir")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
}

fn build_render_subcommand() -> clap::Command {
    clap::Command::new("render")
        .about("Render the dashboard page (default)")
        .arg(
            clap::Arg::new("out")
                .short('o')
                .long("out")
                .value_name("file")
                .help("Output file (default: index.html, '-' for stdout)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("agent")
                .short('a')
                .long("agent")
                .value_name("id")
                .help("Open the detail panel of this agent")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("tab")
                .short('t')
                .long("tab")
                .value_name("tab")
                .help("Detail tab to show (requires --agent)")
                .requires("agent")
                .value_parser(PossibleValuesParser::new(
                    DetailTab::ALL.iter().map(|t| t.key()),
                ))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("section")
                .short('s')
                .long("section")
                .value_name("section")
                .help("Section to show")
                .value_parser(PossibleValuesParser::new(
                    Section::ALL.iter().map(|s| s.key()),
                ))
                .num_args(1),
        )
}

fn build_clap_command() -> clap::Command {
    global_args(
        clap::Command::new("dashboard")
            .about("Render the agent dashboard from agents.json, status.json and projects.json")
            .subcommand_required(false)
            .disable_help_subcommand(true)
            .subcommand(build_render_subcommand())
            .subcommand(
                clap::Command::new("check")
                    .about("Load the data and report counts and dangling project references"),
            )
            .subcommand(clap::Command::new("help").about("Display this help message")),
    )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    let help = matches.get_flag("help") || matches.subcommand_matches("help").is_some();
    let data_dir = matches.get_one::<String>("data-dir").cloned();
    let base_url = matches.get_one::<String>("base-url").cloned();

    let mut config = Config {
        help,
        data_dir,
        base_url,
        ..Default::default()
    };
    match matches.subcommand() {
        Some(("render", m)) => {
            config.command_name = Some("render".to_string());
            config.out = m.get_one::<String>("out").cloned();
            config.agent = m.get_one::<String>("agent").cloned();
            config.tab = m.get_one::<String>("tab").cloned();
            config.section = m.get_one::<String>("section").cloned();
        }
        Some(("help", _)) | None => {}
        Some((name, _)) => config.command_name = Some(name.to_string()),
    }
    config
}

/// 引数列を解析する（テストからも使う）
pub fn parse_from<I, T>(args: I) -> Result<ParseOutcome, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let matches = build_clap_command()
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)))
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    parse_from(std::env::args_os())
}

/// 補完スクリプトを標準出力に出力する（サブコマンドのみの簡易版）
pub fn print_completion(shell: Shell) {
    let subcommands = ["check", "help", "render"];
    match shell {
        Shell::Bash => {
            println!(
                r#"# Fallback completion for dashboard (subcommands only)
_dashboard() {{
  local cur="${{COMP_WORDS[COMP_CWORD]}}"
  COMPREPLY=($(compgen -W "{}" -- "$cur"))
}}
complete -F _dashboard dashboard
"#,
                subcommands.join(" ")
            );
        }
        Shell::Zsh => {
            println!(
                r#"# Fallback completion for dashboard (subcommands only)
#compdef dashboard
local subcommands
subcommands=({})
_describe 'command' subcommands
"#,
                subcommands
                    .iter()
                    .map(|s| format!("\"{}\"", s))
                    .collect::<Vec<_>>()
                    .join(" ")
            );
        }
        Shell::Fish => {
            println!(
                r#"# Fallback completion for dashboard (subcommands only)
complete -c dashboard -a "{}"
"#,
                subcommands.join(" ")
            );
        }
        _ => {}
    }
}

const TAB_REQUIRES_AGENT: &str = "--tab requires --agent";

/// Config を Command に変換する。
///
/// データ取得元の優先順位: --data-dir / --base-url > DASHBOARD_DATA（env_data）> ./data
pub fn config_to_command(config: &Config, env_data: Option<String>) -> Result<Command, Error> {
    if config.help {
        return Ok(Command::Help);
    }
    let source = match (&config.data_dir, &config.base_url) {
        (Some(dir), _) => DataLocation::Dir(dir.into()),
        (None, Some(url)) => DataLocation::Url(url.clone()),
        (None, None) => env_data
            .as_deref()
            .map(DataLocation::from_setting)
            .unwrap_or_default(),
    };

    match config.command_name.as_deref() {
        None | Some("render") => {
            if config.tab.is_some() && config.agent.is_none() {
                return Err(Error::invalid_argument(TAB_REQUIRES_AGENT));
            }
            let nav = NavRequest {
                agent: config.agent.clone(),
                tab: config.tab.as_deref().map(str::parse).transpose()?,
                section: config.section.as_deref().map(str::parse).transpose()?,
            };
            let out = config
                .out
                .as_deref()
                .map(OutputTarget::from_setting)
                .unwrap_or_default();
            Ok(Command::Render { source, out, nav })
        }
        Some("check") => Ok(Command::Check { source }),
        Some(other) => Err(Error::invalid_argument(format!(
            "Command '{}' is not implemented.",
            other
        ))),
    }
}
