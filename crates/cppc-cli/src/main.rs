use clap::{CommandFactory, Parser, Subcommand};
use cppc_build::{BuildManifest, HostEnvironment, Optimize, MANIFEST_FILE};
use cppc_driver::{create_project, DriverError, Session, SessionContext};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "cppc")]
#[command(author, version, about = "A minimal build-tool front end for C++ projects")]
struct Cli {
    /// Print the compiler invocation before executing it
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile the target described by cppc.toml
    Build,

    /// Compile the target, then execute it
    Run,

    /// Compile the target with the debug profile, then execute it
    Test,

    /// Create a new project with the given name
    New {
        /// Project (and output binary) name
        name: String,
    },
}

fn main() -> ExitCode {
    let _ = miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }));

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        let _ = Cli::command().print_help();
        return ExitCode::SUCCESS;
    };

    match dispatch(command, cli.verbose) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let code = e.exit_code();
            eprintln!("{:?}", miette::Report::new(e));
            ExitCode::from(code)
        }
    }
}

fn dispatch(command: Commands, verbose: bool) -> Result<(), DriverError> {
    match command {
        Commands::Build => {
            let (session, ctx) = load_session(None)?;
            session.build(&ctx, verbose)
        }

        Commands::Run => {
            let (session, ctx) = load_session(None)?;
            session.build(&ctx, verbose)?;
            session.run(&ctx)
        }

        Commands::Test => {
            let (session, ctx) = load_session(Some(Optimize::Debug))?;
            session.build(&ctx, verbose)?;
            session.run(&ctx)
        }

        Commands::New { name } => {
            let cwd = std::env::current_dir().map_err(DriverError::CurrentDir)?;
            let root = create_project(&cwd, &name)?;
            println!("Created project at {}", root.display());
            Ok(())
        }
    }
}

/// Load the manifest from the working directory into a ready session.
fn load_session(profile: Option<Optimize>) -> Result<(Session, SessionContext), DriverError> {
    let ctx = SessionContext::from_env()?;
    let manifest = BuildManifest::from_file(&ctx.cwd.join(MANIFEST_FILE))?;

    let mut session = Session::from_manifest(&manifest, HostEnvironment::detect());
    if let Some(profile) = profile {
        session.set_optimize(profile);
    }

    Ok((session, ctx))
}
