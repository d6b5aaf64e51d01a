use clap::{Parser, Subcommand};

use aura_display::i18n::{self, Language};
use aura_display::{config, preview};

#[derive(Parser)]
#[command(name = "aura_display")]
#[command(about = "Preview and check the Aura display translation table")]
struct Cli {
    /// Language code (en/es/de/fr/tr/sv/it); defaults to config, then system locale
    #[arg(short = 'L', long, global = true)]
    lang: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Render every screen mockup for the selected language
    Show,
    /// Print the weekday abbreviations, Sunday first
    Weekdays,
    /// Report fields still identical to the English source text
    Check,
    /// List the supported languages
    Languages,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 미리보기 명령을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let cfg = config::load_or_default()?;
    let language = i18n::resolve_language(cli.lang.as_deref(), Some(cfg.language.as_str()));

    match cli.command.unwrap_or(Command::Show) {
        Command::Show => show(language),
        Command::Weekdays => weekdays(language),
        Command::Check => check(),
        Command::Languages => languages(),
    }
    Ok(())
}

fn show(language: Language) {
    println!("{}", preview::forecast_strip(language));
    println!("{}", preview::settings_screen(language));
    println!("{}", preview::location_screen(language));
    println!("{}", preview::wifi_setup_screen(language));
}

fn weekdays(language: Language) {
    let s = i18n::get_strings(language);
    for (index, day) in s.weekdays.iter().enumerate() {
        println!("{index}) {day}");
    }
}

/// 모든 언어를 돌며 영어 원문이 남아 있는 필드를 보고한다.
fn check() {
    for lang in Language::ALL {
        let report = preview::untranslated_fields(lang);
        if report.is_empty() {
            println!("{}: ok", lang.as_code());
        } else {
            println!("{}: {}", lang.as_code(), report.join(", "));
        }
    }
}

fn languages() {
    for lang in Language::ALL {
        println!("{}) {}  {}", lang.index(), lang.as_code(), lang.native_name());
    }
}
