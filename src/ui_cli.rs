use std::io::{BufRead, Write};

use crate::app::AppError;
use crate::i18n::{keys, Translator};
use crate::input::{InputDraft, InputRecord};

/// 차량 입력값을 대화식으로 받는다. 기존 값이 있으면 엔터로 유지할 수 있다.
pub fn prompt_record<R: BufRead, W: Write>(
    tr: &Translator,
    existing: Option<&InputRecord>,
    input: &mut R,
    out: &mut W,
) -> Result<InputDraft, AppError> {
    writeln!(out, "{}", tr.t(keys::INPUT_HEADING))?;
    if existing.is_some() {
        writeln!(out, "{}", tr.t(keys::INPUT_KEEP_HINT))?;
    }
    let prev = existing.copied().map(InputDraft::from).unwrap_or_default();

    let initial_price = read_f64(tr, keys::PROMPT_INITIAL_PRICE, prev.initial_price, input, out)?;
    let current_age = read_u32(tr, keys::PROMPT_CURRENT_AGE, prev.current_age, input, out)?;
    let kilometers_driven =
        read_f64(tr, keys::PROMPT_KILOMETERS, prev.kilometers_driven, input, out)?;
    let fuel_consumption =
        read_f64(tr, keys::PROMPT_FUEL_CONSUMPTION, prev.fuel_consumption, input, out)?;
    let current_market_value =
        read_f64(tr, keys::PROMPT_MARKET_VALUE, prev.current_market_value, input, out)?;
    let fuel_price = read_f64(tr, keys::PROMPT_FUEL_PRICE, prev.fuel_price, input, out)?;
    let discount_rate = read_f64(tr, keys::PROMPT_DISCOUNT_RATE, prev.discount_rate, input, out)?;

    Ok(InputDraft {
        initial_price: Some(initial_price),
        current_age: Some(current_age),
        kilometers_driven: Some(kilometers_driven),
        fuel_consumption: Some(fuel_consumption),
        current_market_value: Some(current_market_value),
        fuel_price: Some(fuel_price),
        discount_rate: Some(discount_rate),
    })
}

fn read_line<R: BufRead, W: Write>(
    prompt: &str,
    input: &mut R,
    out: &mut W,
) -> Result<String, AppError> {
    write!(out, "{prompt}")?;
    out.flush()?;
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Err(AppError::Io(std::io::ErrorKind::UnexpectedEof.into()));
    }
    Ok(buf)
}

fn read_value<T, R, W>(
    tr: &Translator,
    key: &str,
    default: Option<T>,
    input: &mut R,
    out: &mut W,
) -> Result<T, AppError>
where
    T: std::str::FromStr + std::fmt::Display + Copy,
    R: BufRead,
    W: Write,
{
    let prompt = match default {
        Some(v) => format!("{} [{v}]: ", tr.t(key)),
        None => format!("{}: ", tr.t(key)),
    };
    loop {
        let s = read_line(&prompt, input, out)?;
        let s = s.trim();
        if s.is_empty() {
            if let Some(v) = default {
                return Ok(v);
            }
        } else if let Ok(v) = s.parse::<T>() {
            return Ok(v);
        }
        writeln!(out, "{}", tr.t(keys::ERROR_INVALID_NUMBER))?;
    }
}

fn read_f64<R: BufRead, W: Write>(
    tr: &Translator,
    key: &str,
    default: Option<f64>,
    input: &mut R,
    out: &mut W,
) -> Result<f64, AppError> {
    read_value(tr, key, default, input, out)
}

fn read_u32<R: BufRead, W: Write>(
    tr: &Translator,
    key: &str,
    default: Option<u32>,
    input: &mut R,
    out: &mut W,
) -> Result<u32, AppError> {
    read_value(tr, key, default, input, out)
}
