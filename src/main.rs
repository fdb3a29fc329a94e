use clap::Parser;
use sinchai::cli::{AdviseArgs, Cli, Commands, OutputFormat};
use sinchai::config::Config;
use sinchai::error::{Result, SinchaiError};
use sinchai::logic::{calculate_irrigation, IrrigationInput};
use sinchai::models::{
    CropType, FarmProfile, ForecastDay, IrrigationMethod, SoilType, WeatherSnapshot,
};
use sinchai::report::AdvisoryReport;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init => {
            Config::setup_interactive()?;
            Ok(())
        }
        Commands::Check => check(cli.config),
        Commands::Advise(args) => advise(cli.config, args),
    }
}

fn check(config_override: Option<PathBuf>) -> Result<()> {
    let config = Config::load(config_override)?;
    let profile = config.farm_profile()?;
    println!("Configuration OK");
    println!("  Farm:  {}", profile.name);
    println!("  Crop:  {}", profile.crop);
    println!("  Soil:  {}", profile.soil);
    println!(
        "  Field: {} acres, {} irrigation",
        profile.field_size_acres, profile.irrigation_method
    );
    Ok(())
}

fn advise(config_override: Option<PathBuf>, args: AdviseArgs) -> Result<()> {
    let mut profile = if Config::exists(config_override.as_ref()) {
        Config::load(config_override)?.farm_profile()?
    } else {
        tracing::warn!("No config found, using the default farm profile");
        FarmProfile::default()
    };
    apply_profile_overrides(&mut profile, &args)?;

    let weather = load_weather(&args)?;
    let chance = weather.chance_of_rain();
    if !(0.0..=100.0).contains(&chance) {
        return Err(SinchaiError::InvalidInput(format!(
            "Chance of rain must be in 0-100, got {}",
            chance
        )));
    }

    let input = IrrigationInput::from_conditions(&profile, &weather, args.critical_stage);
    tracing::debug!(?input, "Evaluating irrigation input");
    let advice = calculate_irrigation(&input);

    let report = AdvisoryReport::new(&profile, &weather, args.critical_stage, advice);
    match args.format {
        OutputFormat::Text => print!("{}", report.to_text()),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }
    Ok(())
}

fn apply_profile_overrides(profile: &mut FarmProfile, args: &AdviseArgs) -> Result<()> {
    if let Some(ref crop) = args.crop {
        profile.crop = CropType::from_str(crop)
            .ok_or_else(|| SinchaiError::InvalidInput(format!("Unknown crop '{}'", crop)))?;
    }
    if let Some(ref soil) = args.soil {
        profile.soil = SoilType::from_str(soil)
            .ok_or_else(|| SinchaiError::InvalidInput(format!("Unknown soil type '{}'", soil)))?;
    }
    if let Some(ref method) = args.method {
        profile.irrigation_method = IrrigationMethod::from_str(method).ok_or_else(|| {
            SinchaiError::InvalidInput(format!("Unknown irrigation method '{}'", method))
        })?;
    }
    if let Some(acres) = args.acres {
        if !(acres > 0.0) {
            return Err(SinchaiError::InvalidInput(format!(
                "Field size must be positive, got {}",
                acres
            )));
        }
        profile.field_size_acres = acres;
    }
    Ok(())
}

fn load_weather(args: &AdviseArgs) -> Result<WeatherSnapshot> {
    if let Some(ref path) = args.weather {
        tracing::info!("Loading weather snapshot from {}", path.display());
        return WeatherSnapshot::from_json_file(path);
    }

    let temperature_c = args.temp.ok_or_else(|| {
        SinchaiError::InvalidInput("Provide --weather FILE or at least --temp".into())
    })?;

    Ok(WeatherSnapshot {
        observed_at: None,
        temperature_c,
        humidity_percent: args.humidity,
        wind_speed_kmh: args.wind,
        precip_mm: 0.0,
        forecast: vec![ForecastDay {
            date: None,
            rain_mm: args.rain,
            chance_of_rain: args.rain_chance,
        }],
    })
}
