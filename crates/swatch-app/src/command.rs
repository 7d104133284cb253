// ABOUTME: Line commands understood by the headless picker driver.
// ABOUTME: Parses one stdin line into an input event for the color picker.

use anyhow::{anyhow, bail, Context, Result};
use swatch_core::Tab;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Hue(u16),
    SaturationBrightness(u8, u8),
    Alpha(u8),
    DragHue { x: f32, width: f32 },
    DragPad { x: f32, y: f32, size: f32 },
    DragAlpha { x: f32, width: f32 },
    Focus,
    Type(String),
    Submit,
    Blur,
    Value(String),
    Set(String),
    Select(String),
    Save,
    Clear,
    Tab(Tab),
    Palette(usize),
    Press,
    Open,
    Close,
    Show,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  hue <deg>                 sb <sat> <bright>        alpha <pct>
  drag-hue <x> <width>      drag-pad <x> <y> <size>  drag-alpha <x> <width>
  focus | type <text> | submit | blur               hex field
  value <hex>               controlled value from the caller
  set <hex>                 imperative set
  select <hex> | save | clear
  tab <picker|values|recent|palettes>   palette <index>
  press | open | close       swatch tap, imperative open/close
  show | help | quit";

fn arg<'a>(args: &[&'a str], index: usize, name: &str) -> Result<&'a str> {
    args.get(index)
        .copied()
        .ok_or_else(|| anyhow!("missing <{}>", name))
}

fn number<T>(args: &[&str], index: usize, name: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw = arg(args, index, name)?;
    raw.parse()
        .with_context(|| format!("<{}> must be a number, got {:?}", name, raw))
}

fn parse_tab(name: &str) -> Result<Tab> {
    match name {
        "picker" => Ok(Tab::Picker),
        "values" => Ok(Tab::Values),
        "recent" => Ok(Tab::Recent),
        "palettes" => Ok(Tab::Palettes),
        other => bail!("unknown tab {:?}", other),
    }
}

/// Parse one line. Blank lines and `#` comments yield None.
pub fn parse(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with("# ") || line == "#" {
        return Ok(None);
    }

    let (name, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();
    let args: Vec<&str> = rest.split_whitespace().collect();

    let command = match name {
        "hue" => Command::Hue(number(&args, 0, "deg")?),
        "sb" => Command::SaturationBrightness(number(&args, 0, "sat")?, number(&args, 1, "bright")?),
        "alpha" => Command::Alpha(number(&args, 0, "pct")?),
        "drag-hue" => Command::DragHue {
            x: number(&args, 0, "x")?,
            width: number(&args, 1, "width")?,
        },
        "drag-pad" => Command::DragPad {
            x: number(&args, 0, "x")?,
            y: number(&args, 1, "y")?,
            size: number(&args, 2, "size")?,
        },
        "drag-alpha" => Command::DragAlpha {
            x: number(&args, 0, "x")?,
            width: number(&args, 1, "width")?,
        },
        "focus" => Command::Focus,
        // Keep the text verbatim; it may be empty or invalid on purpose
        "type" => Command::Type(rest.to_string()),
        "submit" => Command::Submit,
        "blur" => Command::Blur,
        "value" => Command::Value(arg(&args, 0, "hex")?.to_string()),
        "set" => Command::Set(arg(&args, 0, "hex")?.to_string()),
        "select" => Command::Select(arg(&args, 0, "hex")?.to_string()),
        "save" => Command::Save,
        "clear" => Command::Clear,
        "tab" => Command::Tab(parse_tab(arg(&args, 0, "tab")?)?),
        "palette" => Command::Palette(number(&args, 0, "index")?),
        "press" => Command::Press,
        "open" => Command::Open,
        "close" => Command::Close,
        "show" => Command::Show,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => bail!("unknown command {:?} (try `help`)", other),
    };
    Ok(Some(command))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_commands() {
        assert_eq!(parse("hue 120").unwrap(), Some(Command::Hue(120)));
        assert_eq!(
            parse("  sb 50 75 ").unwrap(),
            Some(Command::SaturationBrightness(50, 75))
        );
        assert_eq!(
            parse("drag-pad 10 20.5 100").unwrap(),
            Some(Command::DragPad { x: 10.0, y: 20.5, size: 100.0 })
        );
    }

    #[test]
    fn type_keeps_raw_text() {
        assert_eq!(parse("type #ff00").unwrap(), Some(Command::Type("#ff00".into())));
        assert_eq!(parse("type").unwrap(), Some(Command::Type(String::new())));
    }

    #[test]
    fn blank_and_comment_lines_are_skipped() {
        assert_eq!(parse("").unwrap(), None);
        assert_eq!(parse("   ").unwrap(), None);
        assert_eq!(parse("# drag the hue strip").unwrap(), None);
    }

    #[test]
    fn tabs_by_name() {
        assert_eq!(parse("tab recent").unwrap(), Some(Command::Tab(Tab::Recent)));
        assert!(parse("tab colors").is_err());
    }

    #[test]
    fn bad_input_is_an_error() {
        assert!(parse("hue").is_err());
        assert!(parse("hue red").is_err());
        assert!(parse("alpha 300").is_err());
        assert!(parse("paint").is_err());
    }
}
