use std::env;
use std::ffi::OsStr;
use std::path::PathBuf;

use anyhow::Context as _;
use log::info;
use seahorse::{App, Command, Context, Flag, FlagType};

use timeforge::generate_time_sheet;
use timeforge::input::{Config, ConfigBuilder};
use timeforge::time::{holiday, Date, Month, WorkingDuration, Year};

fn set_env_if_absent<K: AsRef<OsStr>, V: AsRef<OsStr>>(var: K, default: impl FnOnce() -> V) {
    if env::var(var.as_ref()).is_err() {
        env::set_var(var, default());
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let is_verbose = args.iter().any(|arg| arg == "--verbose" || arg == "-v");

    set_env_if_absent("RUST_APP_LOG", || if is_verbose { "debug" } else { "info" });
    color_backtrace::install();
    pretty_env_logger::init_custom_env("RUST_APP_LOG");

    run(args);
}

mod seahorse_exts {
    use core::fmt;
    use std::str::FromStr;

    use log::error;
    use seahorse::Context;

    /// Logs the error and exits, seahorse actions can not return one.
    pub fn exit_on_error(result: anyhow::Result<()>) {
        if let Err(e) = result {
            error!("{:?}", e);
            ::std::process::exit(1);
        }
    }

    pub trait ContextExt {
        fn context(&self) -> &Context;

        /// Parses the flag if it was given.
        fn optional_flag<T>(&self, name: &str) -> anyhow::Result<Option<T>>
        where
            T: FromStr,
            T::Err: fmt::Display,
        {
            match self.context().string_flag(name) {
                Ok(value) => value.parse().map(Some).map_err(|e| {
                    anyhow::anyhow!("invalid value \"{}\" for flag \"{}\": {}", value, name, e)
                }),
                Err(_) => Ok(None),
            }
        }
    }

    impl ContextExt for Context {
        fn context(&self) -> &Context {
            self
        }
    }
}

use seahorse_exts::{exit_on_error, ContextExt};

fn build_config(context: &Context) -> anyhow::Result<Config> {
    let mut builder = match context.optional_flag::<PathBuf>("config")? {
        Some(path) => {
            let path = dunce::canonicalize(&path)
                .with_context(|| format!("config file `{}` not found", path.display()))?;
            info!("reading config from `{}`", path.display());
            ConfigBuilder::from_path(path)?
        }
        None => ConfigBuilder::new(),
    };

    if let Some(name) = context.optional_flag::<String>("name")? {
        builder.name(name);
    }

    if let Some(month) = context.optional_flag::<usize>("month")? {
        builder.month(Month::try_from(month)?);
    }

    if let Some(year) = context.optional_flag::<usize>("year")? {
        builder.year(Year::new(year));
    }

    if let Some(time) = context.optional_flag::<WorkingDuration>("time")? {
        builder.working_time(time);
    }

    if let Some(staff_id) = context.optional_flag::<usize>("personell")? {
        builder.staff_id(staff_id);
    }

    if let Some(wage) = context.optional_flag::<f64>("salary")? {
        builder.wage(wage);
    }

    if let Some(organisation) = context.optional_flag::<String>("organisation")? {
        builder.organisation(organisation);
    }

    if let Some(job) = context.optional_flag::<String>("job")? {
        builder.job(job);
    }

    if let Some(output) = context.optional_flag::<PathBuf>("output")? {
        builder.output(output);
    }

    if let Some(seed) = context.optional_flag::<u64>("seed")? {
        builder.seed(seed);
    }

    let config = builder.build()?;
    info!("finished building config");

    Ok(config)
}

fn make(context: &Context) -> anyhow::Result<()> {
    let config = build_config(context)?;
    generate_time_sheet(&config)?;

    Ok(())
}

fn holidays(context: &Context) -> anyhow::Result<()> {
    let year = context
        .optional_flag::<usize>("year")?
        .map_or_else(|| Date::today().year(), Year::new);

    for (date, entry) in holiday::holidays_in_year(year) {
        println!("{} ({}): {}", date, date.week_day(), entry.name());
    }

    Ok(())
}

fn run(args: Vec<String>) {
    let make_command = Command::new("make")
        .usage(format!("{} make [args]", args[0]))
        .description("Generates the fields of a time sheet and writes them as JSON.")
        .flag(
            Flag::new("config", FlagType::String)
                .alias("c")
                .description("[optional] Path to a TOML config file, flags take precedence."),
        )
        .flag(
            Flag::new("name", FlagType::String)
                .alias("n")
                .description("Name of the working person."),
        )
        .flag(
            Flag::new("month", FlagType::String)
                .alias("m")
                .description("[optional] The month (1-12). Default: the current month"),
        )
        .flag(
            Flag::new("year", FlagType::String)
                .alias("y")
                .description("[optional] The year. Default: the current year"),
        )
        .flag(
            Flag::new("time", FlagType::String)
                .alias("t")
                .description("The working time of the month, e.g. `40`, `7.5` or `07:30`."),
        )
        .flag(
            Flag::new("personell", FlagType::String)
                .alias("p")
                .description("The personell number."),
        )
        .flag(
            Flag::new("salary", FlagType::String)
                .alias("s")
                .description("The salary per hour in euros."),
        )
        .flag(
            Flag::new("organisation", FlagType::String)
                .alias("O")
                .description("Name of the organisational unit."),
        )
        .flag(
            Flag::new("job", FlagType::String)
                .alias("j")
                .description("Description of the job task."),
        )
        .flag(
            Flag::new("output", FlagType::String)
                .alias("o")
                .description("[optional] Path to the output file. Default: `<year>-<month>.json`"),
        )
        .flag(
            Flag::new("seed", FlagType::String)
                .description("[optional] Seed for the random generator, to reproduce a time sheet."),
        )
        .flag(
            Flag::new("verbose", FlagType::Bool)
                .alias("v")
                .description("[optional] Print debug information."),
        )
        .action(|context: &Context| exit_on_error(make(context)));

    let holidays_command = Command::new("holidays")
        .usage(format!("{} holidays [args]", args[0]))
        .description("Lists the public holidays of Baden-Württemberg.")
        .flag(
            Flag::new("year", FlagType::String)
                .alias("y")
                .description("[optional] The year. Default: the current year"),
        )
        .flag(
            Flag::new("verbose", FlagType::Bool)
                .alias("v")
                .description("[optional] Print debug information."),
        )
        .action(|context: &Context| exit_on_error(holidays(context)));

    let app = App::new(env!("CARGO_PKG_NAME"))
        .description(env!("CARGO_PKG_DESCRIPTION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .usage(format!("{} [args]", args[0]))
        .command(make_command)
        .command(holidays_command);

    app.run(args);
}
