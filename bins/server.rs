use std::process::ExitCode;

use configs::AppConfig;
use tracing::{error, info};
use uuid::Uuid;

const SERVICE: &str = "car-registry";

/// Identity stamped on every lifecycle event of this process.
#[derive(Clone, Copy)]
struct Instance {
    id: Uuid,
    pid: u32,
}

fn install_panic_hook(instance: Instance) {
    std::panic::set_hook(Box::new(move |panic| {
        error!(service = SERVICE, event = "panic", service_id = %instance.id, pid = instance.pid, message = %panic, "unhandled panic");
    }));
}

fn runtime_for(cfg: &AppConfig) -> std::io::Result<tokio::runtime::Runtime> {
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(threads) = cfg.server.worker_threads {
        builder.worker_threads(threads);
    }
    builder.build()
}

async fn serve_until_ctrl_c(cfg: AppConfig, instance: Instance) -> ExitCode {
    tokio::select! {
        res = server::run(cfg) => match res {
            Ok(()) => {
                info!(service = SERVICE, event = "stop", service_id = %instance.id, pid = instance.pid, "server stopped");
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!(service = SERVICE, event = "run_failed", error = %e, "server exited with error");
                ExitCode::FAILURE
            }
        },
        _ = tokio::signal::ctrl_c() => {
            info!(service = SERVICE, event = "shutdown_signal", service_id = %instance.id, pid = instance.pid, "ctrl+c received");
            ExitCode::SUCCESS
        }
    }
}

fn main() -> ExitCode {
    // .env before logging so RUST_LOG and LOG_FORMAT apply
    dotenvy::dotenv().ok();
    common::utils::logging::init_logging_from_env();

    let instance = Instance { id: Uuid::new_v4(), pid: std::process::id() };
    install_panic_hook(instance);

    let cfg = match configs::load_or_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(service = SERVICE, event = "config_invalid", error = %e, "could not load configuration");
            return ExitCode::FAILURE;
        }
    };

    let rt = match runtime_for(&cfg) {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = SERVICE, event = "runtime_build_failed", error = %e, "could not build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(
        service = SERVICE,
        event = "start",
        service_id = %instance.id,
        pid = instance.pid,
        version = env!("CARGO_PKG_VERSION"),
        threads = cfg.server.worker_threads.unwrap_or_default(),
        "car registry starting"
    );
    rt.block_on(serve_until_ctrl_c(cfg, instance))
}
