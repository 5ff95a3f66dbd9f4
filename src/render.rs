use rbanner::{download_file_name, open_image, save_png, BannerLayout, Compositor, NameFont};
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

struct Config {
    template: Option<PathBuf>,
    photo: Option<PathBuf>,
    name: String,
    output_file: Option<PathBuf>,
    font: Option<PathBuf>,
    layout: Option<PathBuf>,
    debug_guides: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            template: None,
            photo: None,
            name: String::new(),
            output_file: None,
            font: None,
            layout: None,
            debug_guides: false,
        }
    }
}

/// Returns the value following option `args[*i]`, advancing `i`.
fn option_value(args: &[String], i: &mut usize, what: &str) -> Result<String> {
    let option = &args[*i];
    *i += 1;
    if *i >= args.len() {
        anyhow::bail!("{} requires {}", option, what);
    }
    Ok(args[*i].clone())
}

fn parse_args() -> Result<Config> {
    let args: Vec<String> = env::args().collect();
    let mut config = Config::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-template" => {
                config.template = Some(option_value(&args, &mut i, "a file path argument")?.into());
            }
            "-photo" => {
                config.photo = Some(option_value(&args, &mut i, "a file path argument")?.into());
            }
            "-name" => {
                config.name = option_value(&args, &mut i, "a text argument")?;
            }
            "-out" => {
                config.output_file = Some(option_value(&args, &mut i, "a file path argument")?.into());
            }
            "-font" => {
                config.font = Some(option_value(&args, &mut i, "a font file argument")?.into());
            }
            "-layout" => {
                config.layout = Some(option_value(&args, &mut i, "a JSON file argument")?.into());
            }
            "-debug" => {
                config.debug_guides = true;
            }
            "-h" | "-help" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {
                log::warn!("Unknown argument: {}", args[i]);
                eprintln!("Warning: Unknown argument: {}", args[i]);
            }
        }
        i += 1;
    }

    Ok(config)
}

fn print_help() {
    println!("Personalized Banner Renderer");
    println!("Usage: banner-render -template <FILE> [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -template <FILE>       Background template image (required)");
    println!("  -photo <FILE>          Photo drawn inside the circle");
    println!("  -name <TEXT>           Name drawn below the photo");
    println!("  -out <FILE>            Output PNG (default: <name>-image.png)");
    println!("  -font <FILE>           TrueType/OpenType font for the name");
    println!("  -layout <FILE>         JSON layout overriding the default positions");
    println!("  -debug                 Draw positioning guides");
    println!("  -h, -help, --help      Show this help message");
    println!();
    println!("Set RUST_LOG=debug for detailed logging.");
}

fn main() -> Result<()> {
    env_logger::init();
    let config = parse_args()?;

    let template_path = config
        .template
        .clone()
        .context("-template is required (see -help)")?;

    let layout = match &config.layout {
        Some(path) => BannerLayout::from_json_file(path)?,
        None => BannerLayout::default(),
    };
    let font = NameFont::from_optional_file(config.font.as_deref())?;
    let compositor = Compositor::new(layout, font)?.with_debug_guides(config.debug_guides);

    let template = open_image(&template_path)?.to_rgba8();
    let photo = config.photo.as_ref().map(open_image).transpose()?;

    let banner = compositor.compose(&template, photo.as_ref(), &config.name);

    let output_path = config
        .output_file
        .clone()
        .unwrap_or_else(|| PathBuf::from(download_file_name(&config.name)));
    save_png(&banner, &output_path)?;

    println!("Banner written to: {}", output_path.display());
    Ok(())
}
