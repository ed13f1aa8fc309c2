use std::path::PathBuf;

use clap::Parser;
use handpad_core::session::InputSession;
use handpad_devices::registry;

mod error;
mod frame_loop;
mod input;
mod menu;
mod settings;

use error::FrontendError;

/// Desktop harness for the handheld input core.
#[derive(Debug, Parser)]
#[command(name = "handpad", version)]
struct Cli {
    /// Device profile to use (overrides the settings file)
    #[arg(long)]
    device: Option<String>,

    /// Settings file (default: <config dir>/handpad/handpad.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start in the menu instead of gameplay
    #[arg(long)]
    menu: bool,

    /// Window scale factor
    #[arg(long, default_value_t = 3)]
    scale: u32,

    /// Print the available device profiles and exit
    #[arg(long)]
    list_devices: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), FrontendError> {
    if cli.list_devices {
        for entry in registry::all() {
            let stick = if entry.profile.has_analog_stick {
                "analog stick"
            } else {
                "no analog stick"
            };
            println!("{:<12} {} ({stick})", entry.name, entry.profile.name);
        }
        return Ok(());
    }

    let settings = settings::load(cli.config.as_deref())?;
    let device_name = cli.device.as_deref().unwrap_or(&settings.device);
    let entry = registry::find(device_name).ok_or_else(|| {
        let names: Vec<_> = registry::all().iter().map(|e| e.name).collect();
        FrontendError::UnknownDevice {
            name: device_name.to_string(),
            available: names.join(", "),
        }
    })?;
    let key_map = input::KeyMap::with_overrides(&settings.keys)?;

    let mut session = InputSession::new(settings.input_config(entry.profile));
    session
        .fast_forward_mut()
        .set_target(settings.fast_forward_target);

    log::info!("Device: {}", entry.profile.name);
    let config = session.config();
    for (slot, hotkey) in config.hotkeys.iter() {
        log::info!("Hotkey {}: {}", slot.name(), config.device.describe(hotkey));
    }

    let options = frame_loop::RunOptions {
        scale: cli.scale.max(1),
        start_in_menu: cli.menu,
    };
    frame_loop::run(&mut session, &key_map, &options)
}
