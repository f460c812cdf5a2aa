use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};

use crate::comparison::Comparison;
use crate::config::{self, Config, ConfigError, OutputFormat};
use crate::i18n::{self, keys, Translator};
use crate::input::{InputDraft, InputError, InputRecord, VehicleRole};
use crate::projection::project;
use crate::report::{self, ReportError};
use crate::store::{InputStore, StoreError};
use crate::ui_cli;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(ConfigError),
    /// 입력값 검증 오류
    Input(InputError),
    /// 입력 저장소 오류
    Store(StoreError),
    /// 결과 출력 오류
    Report(ReportError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Input(e) => write!(f, "입력 오류: {e}"),
            AppError::Store(e) => write!(f, "저장소 오류: {e}"),
            AppError::Report(e) => write!(f, "출력 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<InputError> for AppError {
    fn from(value: InputError) -> Self {
        AppError::Input(value)
    }
}

impl From<StoreError> for AppError {
    fn from(value: StoreError) -> Self {
        AppError::Store(value)
    }
}

impl From<ReportError> for AppError {
    fn from(value: ReportError) -> Self {
        AppError::Report(value)
    }
}

/// 차량 보유비용 예측 CLI.
#[derive(Parser, Debug)]
#[command(
    name = "vehicle_cost_projection",
    about = "Project and compare the 10-year cost of owning a vehicle",
    version
)]
pub struct Cli {
    /// 언어 (auto/ko/en)
    #[arg(long, short = 'L', global = true)]
    pub lang: Option<String>,
    /// 설정 파일 경로 (기본: ./config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// 차량 한 대의 0~10년차 비용을 예측한다
    Project(ProjectArgs),
    /// 저장된 현재/교체 예정 차량을 비교한다
    Compare(CompareArgs),
    /// 차량 입력값을 대화식으로 입력해 저장한다
    Input(InputArgs),
    /// 설정을 변경해 저장한다
    Settings(SettingsArgs),
}

/// 입력 항목 플래그. 지정한 항목만 저장값을 덮어쓴다.
#[derive(Args, Debug, Default, Clone)]
pub struct RecordArgs {
    #[arg(long)]
    pub initial_price: Option<f64>,
    #[arg(long)]
    pub current_age: Option<u32>,
    #[arg(long, visible_alias = "km")]
    pub kilometers_driven: Option<f64>,
    #[arg(long)]
    pub fuel_consumption: Option<f64>,
    #[arg(long)]
    pub current_market_value: Option<f64>,
    #[arg(long)]
    pub fuel_price: Option<f64>,
    #[arg(long)]
    pub discount_rate: Option<f64>,
}

impl From<RecordArgs> for InputDraft {
    fn from(a: RecordArgs) -> Self {
        InputDraft {
            initial_price: a.initial_price,
            current_age: a.current_age,
            kilometers_driven: a.kilometers_driven,
            fuel_consumption: a.fuel_consumption,
            current_market_value: a.current_market_value,
            fuel_price: a.fuel_price,
            discount_rate: a.discount_rate,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct ProjectArgs {
    /// 저장값을 불러올 차량 역할 (current/planned)
    #[arg(long, default_value = "current")]
    pub role: VehicleRole,
    #[command(flatten)]
    pub record: RecordArgs,
    /// 검증된 입력값을 저장소에 기록한다
    #[arg(long)]
    pub save: bool,
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
    /// 입력 저장 파일 (기본: 설정의 inputs_path)
    #[arg(long)]
    pub inputs: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
    #[arg(long)]
    pub inputs: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// 입력할 차량 역할 (current/planned)
    pub role: VehicleRole,
    #[arg(long)]
    pub inputs: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct SettingsArgs {
    #[arg(long)]
    pub language: Option<String>,
    #[arg(long, value_enum)]
    pub output: Option<OutputFormat>,
    #[arg(long)]
    pub inputs_path: Option<String>,
    #[arg(long)]
    pub log_level: Option<String>,
}

/// 명령 실행에 필요한 설정과 번역기.
pub struct Context<'a> {
    pub config: &'a mut Config,
    pub config_path: &'a Path,
    pub translator: &'a Translator,
}

impl Context<'_> {
    fn open_store(&self, override_path: Option<&Path>) -> Result<InputStore, StoreError> {
        let path = override_path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(&self.config.inputs_path));
        InputStore::open(path)
    }
}

/// 표준 입출력으로 명령을 실행한다.
pub fn run(command: Command, ctx: &mut Context<'_>) -> Result<(), AppError> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    execute(command, ctx, &mut stdin.lock(), &mut stdout.lock())
}

/// 명령 하나를 실행하고 결과를 `out`에 쓴다.
pub fn execute<R: BufRead, W: Write>(
    command: Command,
    ctx: &mut Context<'_>,
    input: &mut R,
    out: &mut W,
) -> Result<(), AppError> {
    match command {
        Command::Project(args) => {
            let mut store = ctx.open_store(args.inputs.as_deref())?;
            let stored = store
                .get(args.role)
                .copied()
                .map(InputDraft::from)
                .unwrap_or_default();
            let record = stored.merge(args.record.into()).into_record()?;
            debug!(role = %args.role, ?record, "projecting");
            let table = project(&record);
            let format = args.format.unwrap_or(ctx.config.output);
            writeln!(out, "{}", report::render_projection(&table, format, ctx.translator)?)?;
            if args.save {
                store.set(args.role, record);
                store.save()?;
            }
        }
        Command::Compare(args) => {
            let store = ctx.open_store(args.inputs.as_deref())?;
            let current = stored_record(&store, VehicleRole::Current)?;
            let planned = stored_record(&store, VehicleRole::Planned)?;
            let comparison = Comparison::new(&current, &planned);
            let format = args.format.unwrap_or(ctx.config.output);
            writeln!(
                out,
                "{}",
                report::render_comparison(&comparison, format, ctx.translator)?
            )?;
        }
        Command::Input(args) => {
            let mut store = ctx.open_store(args.inputs.as_deref())?;
            let draft = ui_cli::prompt_record(ctx.translator, store.get(args.role), input, out)?;
            let record = draft.into_record()?;
            store.set(args.role, record);
            store.save()?;
            writeln!(
                out,
                "{} {}",
                ctx.translator.t(keys::INPUTS_SAVED),
                store.path().display()
            )?;
        }
        Command::Settings(args) => {
            writeln!(out, "{}", ctx.translator.t(keys::SETTINGS_HEADING))?;
            apply_settings(ctx.config, args);
            ctx.config.save_to(ctx.config_path)?;
            info!(path = %ctx.config_path.display(), "configuration saved");
            writeln!(out, "{}", ctx.translator.t(keys::SETTINGS_SAVED))?;
        }
    }
    Ok(())
}

fn stored_record(store: &InputStore, role: VehicleRole) -> Result<InputRecord, InputError> {
    let record = store.get(role).ok_or(InputError::MissingRole(role))?;
    record.validate()?;
    Ok(*record)
}

fn apply_settings(cfg: &mut Config, args: SettingsArgs) {
    if let Some(language) = args.language {
        cfg.language = language;
    }
    if let Some(output) = args.output {
        cfg.output = output;
    }
    if let Some(path) = args.inputs_path {
        cfg.inputs_path = path;
    }
    if let Some(level) = args.log_level {
        cfg.log_level = level;
    }
}

/// 오류 메시지 접두어에 쓸 언어. 설정을 읽었으면 설정의 언어도 반영한다.
pub fn error_language(cli_lang: Option<&str>, config: Option<&Config>) -> String {
    i18n::resolve_language(cli_lang, config.map(|c| c.language.as_str()))
}

/// 경로가 주어지면 그 파일을, 아니면 ./config.toml을 로드한다.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(p) => config::load_from(p),
        None => config::load_or_default(),
    }
}
