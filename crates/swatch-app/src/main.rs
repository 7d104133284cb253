// ABOUTME: Headless driver for the swatch color picker.
// ABOUTME: Loads a config, replays commands from stdin, and reports emitted events.

mod command;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use command::{Command, HELP};
use swatch_core::{ColorPalette, PaletteRow, PickerConfig};
use swatch_picker::{ColorPicker, MruList, PaletteView, PickerEvents};

/// Collects picker events; the driver plays the caller that owns the value
/// and (optionally) the saved list
#[derive(Default)]
struct DriverEvents {
    changes: Vec<String>,
    save_requests: Vec<String>,
    clear_requested: bool,
}

impl PickerEvents for DriverEvents {
    fn on_change(&mut self, hex: &str) {
        tracing::info!("onChange {}", hex);
        self.changes.push(hex.to_string());
    }

    fn on_save_color(&mut self, hex: &str) {
        tracing::info!("onSaveColor {}", hex);
        self.save_requests.push(hex.to_string());
    }

    fn on_clear_saved(&mut self) {
        tracing::info!("onClearSaved");
        self.clear_requested = true;
    }
}

struct Options {
    config: Option<PathBuf>,
    palettes: Option<PathBuf>,
    delegated: bool,
}

fn parse_args() -> Result<Options> {
    let mut options = Options {
        config: None,
        palettes: None,
        delegated: false,
    };
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--palettes" => {
                let path = args.next().context("--palettes needs a file")?;
                options.palettes = Some(PathBuf::from(path));
            }
            "--delegated" => options.delegated = true,
            "-h" | "--help" => {
                println!("usage: swatch [--delegated] [--palettes FILE.json] [CONFIG.toml]");
                println!("{}", HELP);
                std::process::exit(0);
            }
            flag if flag.starts_with('-') => bail!("unknown option {:?}", flag),
            _ => options.config = Some(PathBuf::from(arg)),
        }
    }
    Ok(options)
}

struct App {
    picker: ColorPicker<DriverEvents>,
    /// Caller-side saved list, used with --delegated
    owned_saved: Option<MruList>,
    /// Controlled value as the caller last set it
    value: String,
}

impl App {
    fn new(config: PickerConfig, delegated: bool) -> Self {
        let value = config.value.clone();
        let (picker, owned_saved) = if delegated {
            let picker = ColorPicker::with_saved_colors(config, Vec::new(), DriverEvents::default());
            (picker, Some(MruList::unbounded()))
        } else {
            (ColorPicker::new(config, DriverEvents::default()), None)
        };
        Self {
            picker,
            owned_saved,
            value,
        }
    }

    /// Returns false on quit
    fn handle(&mut self, command: Command, out: &mut impl Write) -> Result<bool> {
        match command {
            Command::Hue(hue) => self.picker.set_hue(hue),
            Command::SaturationBrightness(s, b) => self.picker.set_saturation_brightness(s, b),
            Command::Alpha(alpha) => self.picker.set_alpha(alpha),
            Command::DragHue { x, width } => self.picker.drag_hue(x, width),
            Command::DragPad { x, y, size } => self.picker.drag_saturation_brightness(x, y, size),
            Command::DragAlpha { x, width } => self.picker.drag_alpha(x, width),
            Command::Focus => self.picker.focus_hex(),
            Command::Type(text) => self.picker.edit_hex(&text),
            Command::Submit => self.picker.submit_hex(),
            Command::Blur => self.picker.blur_hex(),
            Command::Value(hex) => {
                self.value = hex;
                let outcome = self.picker.set_value(&self.value);
                writeln!(out, "value {} -> {:?}", self.value, outcome)?;
            }
            Command::Set(hex) => self.picker.set_color(&hex),
            Command::Select(hex) => self.picker.select_color(&hex),
            Command::Save => self.picker.save_color(),
            Command::Clear => self.picker.clear_saved(),
            Command::Tab(tab) => {
                if !self.picker.select_tab(tab) {
                    writeln!(out, "tab {:?} is not enabled", tab)?;
                }
            }
            Command::Palette(index) => {
                if !self.picker.select_palette(index) {
                    writeln!(out, "no palette {}", index)?;
                }
            }
            Command::Press => {
                if !self.picker.press_swatch() {
                    writeln!(out, "swatch is inline or disabled")?;
                }
            }
            Command::Open => {
                if !self.picker.open() {
                    writeln!(out, "picker is inline")?;
                }
            }
            Command::Close => self.picker.close(),
            Command::Show => self.show(out)?,
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Quit => return Ok(false),
        }

        self.settle(out)?;
        Ok(true)
    }

    /// Act as the owning caller: echo changes back as the controlled value
    /// and apply saved-list requests
    fn settle(&mut self, out: &mut impl Write) -> Result<()> {
        let events = self.picker.events_mut();
        let changes = std::mem::take(&mut events.changes);
        let saves = std::mem::take(&mut events.save_requests);
        let clear = std::mem::take(&mut events.clear_requested);

        for hex in changes {
            writeln!(out, "change {}", hex)?;
            self.value = hex;
            let outcome = self.picker.set_value(&self.value);
            tracing::debug!("Echoed {} back: {:?}", self.value, outcome);
        }

        if let Some(list) = self.owned_saved.as_mut() {
            if clear {
                list.clear();
            }
            for hex in &saves {
                list.add(hex);
            }
            if clear || !saves.is_empty() {
                self.picker.set_saved_colors(list.as_slice().to_vec());
            }
        }
        Ok(())
    }

    fn show(&self, out: &mut impl Write) -> Result<()> {
        let picker = &self.picker;
        let hsb = picker.hsb();
        let rgb = picker.rgb();

        writeln!(out, "color    {}", picker.get_color())?;
        writeln!(out, "value    {}", self.value)?;
        writeln!(out, "hex      {}", picker.hex_input())?;
        writeln!(out, "hsb      {} {}% {}%", hsb.hue, hsb.saturation, hsb.brightness)?;
        writeln!(out, "rgb      {} {} {}", rgb.r, rgb.g, rgb.b)?;
        if picker.config().show_alpha {
            writeln!(out, "alpha    {}%", picker.alpha())?;
        }
        writeln!(out, "fill     {} (text {})", picker.swatch_fill(), picker.contrast_color())?;
        writeln!(
            out,
            "tab      {} [{}]",
            picker.tab_label(picker.active_tab()),
            picker
                .tabs()
                .iter()
                .map(|t| picker.tab_label(*t))
                .collect::<Vec<_>>()
                .join(", ")
        )?;
        writeln!(out, "open     {}", picker.is_panel_visible())?;
        writeln!(out, "saved    {}", picker.saved_colors().join(" "))?;

        let names = picker.palette_names();
        let name = names.get(picker.active_palette()).copied().unwrap_or_default();
        match picker.palette_view() {
            PaletteView::Rows(rows) => {
                for row in rows {
                    match row {
                        PaletteRow::Simple(swatches) => {
                            let items: Vec<String> =
                                swatches.iter().map(|s| format!("{}={}", s.name, s.hex)).collect();
                            writeln!(out, "{:<8} {}", name, items.join(" "))?;
                        }
                        PaletteRow::Group { name: group, shades } => {
                            let items: Vec<String> =
                                shades.iter().map(|s| format!("{}={}", s.name, s.hex)).collect();
                            writeln!(out, "{:<8} {}: {}", name, group, items.join(" "))?;
                        }
                    }
                }
            }
            PaletteView::Saved(colors) => writeln!(out, "{:<8} {}", name, colors.join(" "))?,
            PaletteView::SavedEmpty => {
                let labels = &picker.config().labels;
                writeln!(out, "{:<8} {} ({})", name, labels.no_saved_colors, labels.no_saved_colors_hint)?;
            }
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    tracing::info!("Starting swatch");

    let options = parse_args()?;
    let mut config = match &options.config {
        Some(path) => PickerConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => PickerConfig::load_or_default(),
    };
    if let Some(path) = &options.palettes {
        let palettes = ColorPalette::load_json(path)
            .with_context(|| format!("loading palettes {}", path.display()))?;
        tracing::info!("Loaded {} palettes from {}", palettes.len(), path.display());
        config.palettes.extend(palettes);
    }
    if config.palettes.is_empty() {
        config.palettes = ColorPalette::presets();
    }

    let mut app = App::new(config, options.delegated);
    let stdin = io::stdin();
    let mut out = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line?;
        match command::parse(&line) {
            Ok(Some(command)) => {
                if !app.handle(command, &mut out)? {
                    break;
                }
            }
            Ok(None) => {}
            Err(e) => writeln!(out, "error: {:#}", e)?,
        }
        out.flush()?;
    }

    tracing::info!("Exiting with color {}", app.picker.get_color());
    Ok(())
}
