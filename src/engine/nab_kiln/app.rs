use std::fmt::Debug;
use std::process::ExitCode;
use std::sync::atomic::{AtomicU8, Ordering};
use crate::join_display;

pub trait CliArgs: clap::Parser + Debug { }
impl<T: clap::Parser + Debug> CliArgs for T { }

fn crate_name<T>() -> &'static str // hacky
{
    let name = std::any::type_name::<T>();
    name.split("::").next().unwrap_or(name)
}

// Workspace crates that log at the app's level rather than the global one
const WORKSPACE_CRATES: &[&str] = &[
    "asset_kiln",
    "nab_kiln",
];

#[derive(Debug)]
pub struct AppRun<TCliArgs: CliArgs>
{
    pub app_name: &'static str,
    pub version_str: &'static str,

    pub start_time: chrono::DateTime<chrono::Local>,
    pub args: TCliArgs,
    pub pid: u32,

    exit_reason: AtomicU8,
}
impl<TCliArgs: CliArgs> AppRun<TCliArgs>
{
    pub fn startup(app_name: &'static str, app_version: &'static str) -> Self
    {
        #[cfg(debug_assertions)]
        let default_log_levels = (log::LevelFilter::Warn, log::LevelFilter::Debug);
        #[cfg(not(debug_assertions))]
        let default_log_levels = (log::LevelFilter::Warn, log::LevelFilter::Info);

        let app_crate = crate_name::<TCliArgs>();
        let mut log_builder = colog::basic_builder();
        log_builder
            .filter_level(default_log_levels.0)
            .filter_module(app_crate, default_log_levels.1);
        for workspace_crate in WORKSPACE_CRATES
        {
            log_builder.filter_module(workspace_crate, default_log_levels.1);
        }
        log_builder.parse_default_env().init();

        let app_run = Self
        {
            app_name,
            version_str: app_version,
            start_time: chrono::Local::now(),
            args: TCliArgs::parse(),
            pid: std::process::id(),
            exit_reason: AtomicU8::new(ExitReason::NormalExit as u8),
        };

        log::info!(target: app_crate,
            "=== Starting {} v{} [{}] (PID {}) at {} ===",
            app_run.app_name,
            app_run.version_str,
            join_display(" ", std::env::args()),
            app_run.pid,
            app_run.start_time);

        app_run
    }

    pub fn set_exit_reason(&self, exit_reason: ExitReason)
    {
        self.exit_reason.store(exit_reason as u8, Ordering::SeqCst);
    }
    pub fn get_exit_reason(&self) -> ExitReason
    {
        ExitReason::from_u8(self.exit_reason.load(Ordering::SeqCst))
    }
}
impl<TCliArgs: CliArgs> Drop for AppRun<TCliArgs>
{
    fn drop(&mut self)
    {
        log::info!(target: "app",
            "Exiting {} (PID {}) at {} with reason {:?}",
            self.app_name,
            self.pid,
            chrono::Local::now(),
            self.get_exit_reason());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitReason
{
    NormalExit = 0,
    Failure = 1,
    Panic = 99,
}
impl ExitReason
{
    fn from_u8(value: u8) -> Self
    {
        match value
        {
            0 => Self::NormalExit,
            99 => Self::Panic,
            _ => Self::Failure,
        }
    }
}
impl std::process::Termination for ExitReason
{
    fn report(self) -> ExitCode
    {
        (self as u8).into()
    }
}

pub fn set_panic_hook()
{
    let default_panic_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic|
    {
        default_panic_hook(panic);

        eprintln!("Exiting (PID {}) at {} with reason {:?}",
                  std::process::id(),
                  chrono::Local::now(),
                  ExitReason::Panic);

        std::process::exit(ExitReason::Panic as i32)
    }));
}
