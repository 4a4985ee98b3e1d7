// Wed Jan 21 2026 - Alex

use super::args::{Args, CheckArgs, Command, IndexType, StatsArgs};
use crate::batch::JaggedBatch;
use crate::bounds::{BoundsValidator, CollectingSink, DiagnosticSink, IndexValue, LogSink, WarningCounter};
use crate::config::Config;
use crate::output::CheckReport;
use crate::ui::{print_info, print_success, print_warning};
use crate::utils::{measure_time, LoggingUtils};
use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

pub struct CommandHandler {
    log_level: Option<String>,
    verbose: u8,
    quiet: bool,
    use_color: bool,
}

impl CommandHandler {
    pub fn new() -> Self {
        Self {
            log_level: None,
            verbose: 0,
            quiet: false,
            use_color: true,
        }
    }

    pub fn execute(mut self, args: Args) -> anyhow::Result<()> {
        self.log_level = args.log_level;
        self.verbose = args.verbose;
        self.quiet = args.quiet;
        self.use_color = !args.no_color;

        if !self.use_color {
            colored::control::set_override(false);
        }

        match args.command {
            Command::Check(check_args) => self.handle_check(check_args),
            Command::Stats(stats_args) => self.handle_stats(stats_args),
        }
    }

    fn setup_logging(&self, fallback: &str) {
        let level = if self.verbose > 0 {
            LoggingUtils::level_from_verbosity(self.verbose)
        } else {
            LoggingUtils::level_from_str(self.log_level.as_deref().unwrap_or(fallback))
        };
        LoggingUtils::init_logger(level, self.use_color);
    }

    fn resolve_config(&self, args: &CheckArgs) -> anyhow::Result<Config> {
        let mut config = match &args.config {
            Some(path) => Config::from_file(path).map_err(|e| anyhow::anyhow!(e))?,
            None => Config::default(),
        };

        if let Some(mode) = args.mode {
            config.mode = mode;
        }
        if args.sequential {
            config.parallel = false;
        }
        if let Some(threads) = args.threads {
            config.threads = Some(threads);
        }

        config.validate().map_err(|e| anyhow::anyhow!(e))?;
        Ok(config)
    }

    fn handle_check(&self, args: CheckArgs) -> anyhow::Result<()> {
        args.validate().map_err(|e| anyhow::anyhow!(e))?;
        let config = self.resolve_config(&args)?;
        self.setup_logging(&config.log_level);

        log::info!(
            "Checking {:?} in {} mode on {} threads",
            args.input,
            config.mode,
            config.effective_threads()
        );

        match args.index_type {
            IndexType::I64 => self.run_check::<i64>(&args, &config),
            IndexType::I32 => self.run_check::<i32>(&args, &config),
        }
    }

    fn run_check<I>(&self, args: &CheckArgs, config: &Config) -> anyhow::Result<()>
    where
        I: IndexValue + Serialize + DeserializeOwned,
    {
        let mut batch: JaggedBatch<I> = JaggedBatch::from_file(&args.input)
            .with_context(|| format!("Failed to load batch {:?}", args.input))?;
        let layout = batch.layout()?;

        let sink = Arc::new(CollectingSink::new());
        let validator = BoundsValidator::new(config)?.with_sink(sink.clone());
        let warning = WarningCounter::new();

        let (result, elapsed) = measure_time(|| batch.check(&validator, &warning));
        let summary = result.with_context(|| format!("Batch {:?} is unsafe to use", args.input))?;

        let diagnostics = sink.records();
        for violation in &diagnostics {
            LogSink.emit(violation);
        }

        let report = CheckReport::new(config.mode, I::TYPE_NAME, layout)
            .with_summary(summary)
            .with_warning_count(warning.get())
            .with_diagnostics(diagnostics)
            .with_elapsed(elapsed);

        if args.json {
            println!("{}", report.to_json());
        } else if !self.quiet {
            print!("{}", report.format_report());
            if report.is_clean() {
                print_success("Batch is within bounds");
            } else {
                print_warning(&format!("Repaired {} violations", report.summary.violations()));
            }
        }

        if let Some(output) = &args.output {
            batch
                .to_file(output, !args.compact)
                .with_context(|| format!("Failed to write batch {:?}", output))?;
            if !self.quiet && !args.json {
                print_info(&format!("Sanitized batch written to {:?}", output));
            }
        }

        Ok(())
    }

    fn handle_stats(&self, args: StatsArgs) -> anyhow::Result<()> {
        self.setup_logging("warn");

        if !args.input.exists() {
            return Err(anyhow::anyhow!("Input file does not exist: {:?}", args.input));
        }

        let stats = match args.index_type {
            IndexType::I64 => JaggedBatch::<i64>::from_file(&args.input)?.stats()?,
            IndexType::I32 => JaggedBatch::<i32>::from_file(&args.input)?.stats()?,
        };

        if args.json {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        } else {
            println!("{}", stats);
        }

        Ok(())
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
