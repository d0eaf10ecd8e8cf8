use crate::build_info;
use crate::domain::*;
use crate::error::*;
use crate::signal::*;
use crate::solver::*;
use clap::Parser;
use std::path::PathBuf;

#[cfg(feature = "profile-with-puffin")]
use std::sync::Mutex;

#[cfg(feature = "profile-with-puffin")]
lazy_static::lazy_static! {
    static ref puffin_server: Mutex<Option<puffin_http::Server>> = {
        log::info!("Initializing profiling server:");
        let server_addr =
                format!("127.0.0.1:{}", puffin_http::DEFAULT_PORT);
        log::info!(
                "Run this to view profiling data:  puffin_viewer {server_addr}"
            );
        let server = puffin_http::Server::new(&server_addr).ok();
        Mutex::new(server)
    };
}

/// blur1d stencil executable
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Directory for output files, will be created.
    /// WARNING, if this Directory
    /// already exists, current contents will be removed.
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Chunk size to use for parallelism.
    #[arg(short, long, default_value = "1000")]
    pub chunk_size: usize,

    /// Number of samples in the time domain.
    #[arg(short = 'n', long, default_value = "500")]
    pub samples: usize,

    /// End of the time domain.
    #[arg(long, default_value = "1.0")]
    pub t_max: f64,

    /// Stencil rounds to apply.
    #[arg(short, long, default_value = "1024", allow_negative_numbers = true)]
    pub steps: i64,

    /// How many lines the output image should have.
    #[arg(short, long, default_value = "200")]
    pub lines: usize,

    /// Timed repetitions per variant.
    #[arg(long, default_value = "7")]
    pub trials: usize,

    /// The number of threads to use.
    #[arg(short, long, default_value = "8")]
    pub threads: usize,

    /// Initial condition.
    #[arg(long, value_enum, default_value = "sawtooth")]
    pub signal: ClapSignalType,

    /// Sawtooth frequency, impulse variance or random maximum.
    #[arg(short, long, default_value = "5.0")]
    pub dial: f64,

    /// Kernel used by single variant executables.
    #[arg(long, value_enum, default_value = "compiled")]
    pub variant: Variant,

    /// Buffer strategy.
    #[arg(long, value_enum, default_value = "double-buffer")]
    pub buffering: Buffering,

    /// Print build information and quit
    #[arg(long)]
    pub build_info: bool,
}

/// Log to stderr, `info` unless `RUST_LOG` says otherwise.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .try_init();
}

impl Args {
    pub fn cli_setup(name: &str) -> anyhow::Result<Self> {
        let args = Args::parse();
        args.setup(name)?;
        Ok(args)
    }

    pub fn setup(&self, name: &str) -> anyhow::Result<()> {
        if self.build_info {
            build_info::print_report(name);
            std::process::exit(0);
        }

        init_logging();
        log::info!("EXAMPLE: {}", name);
        log::info!("GIT DESCRIBE: {}", env!("GIT_DESCRIBE"));

        if let Some(output_dir) = &self.output_dir {
            let _ = std::fs::remove_dir_all(output_dir);
            std::fs::create_dir_all(output_dir)?;
        }

        #[cfg(feature = "profile-with-puffin")]
        {
            if puffin_server.lock().map(|s| s.is_some()).unwrap_or(false) {
                profiling::puffin::set_scopes_on(true);
                profiling::finish_frame!();
            }
        }

        // Fails when the global pool already exists, keep going with it.
        if let Err(e) = rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .thread_name(|i| format!("rayon_thread_{}", i))
            .build_global()
        {
            log::warn!("rayon pool: {e}");
        }
        Ok(())
    }

    pub fn time_domain(&self) -> Result<TimeDomain> {
        TimeDomain::linspace(self.t_max, self.samples)
    }

    pub fn signal_type(&self) -> SignalType {
        self.signal.to_signal_type(self.dial)
    }

    pub fn initial_signal(&self) -> Result<(TimeDomain, Signal)> {
        let time_domain = self.time_domain()?;
        let signal = self.signal_type().generate(&time_domain, self.chunk_size)?;
        Ok((time_domain, signal))
    }

    pub fn steps(&self) -> Result<usize> {
        checked_steps(self.steps)
    }

    pub fn solver(&self) -> DiffusionSolver {
        DiffusionSolver::new(self.variant, self.buffering, self.chunk_size)
    }

    /// Every variant with the configured buffering, reference first.
    pub fn all_solvers(&self) -> Vec<DiffusionSolver> {
        Variant::ALL
            .iter()
            .map(|v| DiffusionSolver::new(*v, self.buffering, self.chunk_size))
            .collect()
    }

    pub fn output_path(&self, file_name: &str) -> Option<PathBuf> {
        self.output_dir.as_ref().map(|dir| dir.join(file_name))
    }

    pub fn finish(&self) {
        #[cfg(feature = "profile-with-puffin")]
        {
            log::info!("Flushing profiler");

            // Dropping the server flushes the profiling data
            if let Ok(mut server) = puffin_server.lock() {
                server.take();
            }
        }
    }
}
