//! Conversion of raw tokens into typed values.
//!
//! Every type a flag can write into implements [`FlagValue`]. Conversion
//! failures are reported as a human readable reason, which the parser embeds
//! into its error message.

use std::{ffi::OsString, path::PathBuf};

/// A type that a flag can parse a token into.
///
/// `parse_into` writes into an existing slot instead of returning a fresh
/// value, which lets collections append on every occurrence. On failure the
/// slot must be left unchanged.
///
/// ```
/// use flagparser::FlagValue;
///
/// struct OddNumber(u16);
///
/// impl FlagValue for OddNumber {
///     fn parse_into(&mut self, input: &str) -> Result<(), String> {
///         let mut n = 0u16;
///         n.parse_into(input)?;
///         if n % 2 == 0 {
///             return Err(format!("{n} is not a odd number"));
///         }
///         self.0 = n;
///         Ok(())
///     }
/// }
/// ```
pub trait FlagValue {
    /// Whether the flag consumes a value token. Only switches return `false`.
    fn needs_value() -> bool {
        true
    }

    fn parse_into(&mut self, input: &str) -> Result<(), String>;
}

impl FlagValue for bool {
    fn needs_value() -> bool {
        false
    }

    fn parse_into(&mut self, _input: &str) -> Result<(), String> {
        *self = true;
        Ok(())
    }
}

macro_rules! int_value {
    ($($ty:ty),*) => {$(
        impl FlagValue for $ty {
            fn parse_into(&mut self, input: &str) -> Result<(), String> {
                let wide = input
                    .parse::<i128>()
                    .map_err(|_| format!("failed to convert int (\"{input}\")"))?;
                *self = <$ty>::try_from(wide)
                    .map_err(|_| format!("{wide} is outside of its range"))?;
                Ok(())
            }
        }
    )*};
}

int_value!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! float_value {
    ($($ty:ty),*) => {$(
        impl FlagValue for $ty {
            fn parse_into(&mut self, input: &str) -> Result<(), String> {
                *self = input
                    .parse::<$ty>()
                    .map_err(|_| format!("failed to convert float (\"{input}\")"))?;
                Ok(())
            }
        }
    )*};
}

float_value!(f32, f64);

impl FlagValue for String {
    fn parse_into(&mut self, input: &str) -> Result<(), String> {
        if input.is_empty() {
            return Err("input is empty".to_string());
        }
        *self = input.to_string();
        Ok(())
    }
}

impl FlagValue for PathBuf {
    fn parse_into(&mut self, input: &str) -> Result<(), String> {
        if input.is_empty() {
            return Err("input is empty".to_string());
        }
        *self = PathBuf::from(input);
        Ok(())
    }
}

impl FlagValue for OsString {
    fn parse_into(&mut self, input: &str) -> Result<(), String> {
        if input.is_empty() {
            return Err("input is empty".to_string());
        }
        *self = OsString::from(input);
        Ok(())
    }
}

/// Each occurrence appends one element.
impl<T: FlagValue + Default> FlagValue for Vec<T> {
    fn parse_into(&mut self, input: &str) -> Result<(), String> {
        let mut item = T::default();
        item.parse_into(input)?;
        self.push(item);
        Ok(())
    }
}
