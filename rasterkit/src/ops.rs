//! Named operations
//!
//! Maps an operation name and a single numeric value, as a control surface
//! would supply them, onto the library calls. Filters that take no
//! parameter ignore the value.

use rasterkit_core::{ArithOp, Error, GrayMethod, Raster};
use rasterkit_filter::{
    FilterResult, Kernel, convolve, gaussian_blur, median_filter, smooth, sobel_edge,
};
use std::fmt;

/// A single raster transformation
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Add a signed amount to R, G and B with saturation
    Brightness(i32),
    /// Pointwise arithmetic on R, G and B
    Arithmetic(ArithOp, f64),
    /// Grayscale conversion
    Grayscale(GrayMethod),
    /// 3x3 box smoothing
    Smooth,
    /// 3x3 Gaussian blur
    GaussianBlur,
    /// 3x3 median filter
    Median,
    /// Sobel edge magnitude
    Sobel,
    /// Convolution with a caller-supplied kernel
    Convolve(Kernel),
}

impl Operation {
    /// Build an operation from its selector name and a value.
    ///
    /// Names are matched case-insensitively after trimming. The value is
    /// rounded to an integer for `brightness` and passed through for the
    /// arithmetic operations.
    ///
    /// # Errors
    ///
    /// - `InvalidMethod` for an unknown name.
    /// - `InvalidParameter` when `brightness` gets a non-finite value.
    ///
    /// # Example
    ///
    /// ```
    /// use rasterkit::ops::Operation;
    /// use rasterkit::{ArithOp, GrayMethod};
    ///
    /// assert_eq!(
    ///     Operation::parse("Divide", 2.0).unwrap(),
    ///     Operation::Arithmetic(ArithOp::Divide, 2.0)
    /// );
    /// assert_eq!(
    ///     Operation::parse("average", 0.0).unwrap(),
    ///     Operation::Grayscale(GrayMethod::Average)
    /// );
    /// assert!(Operation::parse("sharpen", 0.0).is_err());
    /// ```
    pub fn parse(name: &str, value: f64) -> FilterResult<Operation> {
        let key = name.trim().to_ascii_lowercase();
        let op = match key.as_str() {
            "brightness" => {
                if !value.is_finite() {
                    return Err(Error::InvalidParameter(format!(
                        "brightness amount must be finite, got {value}"
                    ))
                    .into());
                }
                Operation::Brightness(value.round() as i32)
            }
            "add" | "subtract" | "multiply" | "divide" => {
                Operation::Arithmetic(key.parse::<ArithOp>()?, value)
            }
            "average" | "luminosity" => Operation::Grayscale(key.parse::<GrayMethod>()?),
            "smoothing" => Operation::Smooth,
            "gaussian" => Operation::GaussianBlur,
            "median" => Operation::Median,
            "sobel" => Operation::Sobel,
            _ => {
                return Err(Error::InvalidMethod(format!("unknown operation '{name}'")).into());
            }
        };
        log::trace!("parsed operation {:?} from {:?}", op, name);
        Ok(op)
    }

    /// Canonical selector name
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Brightness(_) => "brightness",
            Operation::Arithmetic(op, _) => op.name(),
            Operation::Grayscale(method) => method.name(),
            Operation::Smooth => "smoothing",
            Operation::GaussianBlur => "gaussian",
            Operation::Median => "median",
            Operation::Sobel => "sobel",
            Operation::Convolve(_) => "convolve",
        }
    }

    /// Apply the operation, returning a new raster.
    pub fn apply(&self, raster: &Raster) -> FilterResult<Raster> {
        log::debug!(
            "apply {}: {}x{}",
            self.name(),
            raster.width(),
            raster.height()
        );
        match self {
            Operation::Brightness(amount) => Ok(raster.adjust_brightness(*amount)),
            Operation::Arithmetic(op, value) => Ok(raster.arithmetic(*op, *value)?),
            Operation::Grayscale(method) => Ok(raster.to_grayscale(*method)),
            Operation::Smooth => smooth(raster),
            Operation::GaussianBlur => gaussian_blur(raster),
            Operation::Median => median_filter(raster),
            Operation::Sobel => sobel_edge(raster),
            Operation::Convolve(kernel) => convolve(raster, kernel),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Brightness(amount) => write!(f, "brightness({amount})"),
            Operation::Arithmetic(op, value) => write!(f, "{op}({value})"),
            Operation::Convolve(kernel) => {
                write!(f, "convolve({0}x{0})", kernel.size())
            }
            other => f.write_str(other.name()),
        }
    }
}

/// Apply operations in order, each to the previous result.
///
/// The first failure aborts the chain and is returned; the input is never
/// modified.
pub fn apply_all(raster: &Raster, ops: &[Operation]) -> FilterResult<Raster> {
    let mut current = raster.clone();
    for op in ops {
        current = op.apply(&current)?;
    }
    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasterkit_filter::FilterError;

    #[test]
    fn test_parse_names() {
        let cases = [
            ("brightness", Operation::Brightness(12)),
            ("ADD", Operation::Arithmetic(ArithOp::Add, 12.4)),
            ("subtract", Operation::Arithmetic(ArithOp::Subtract, 12.4)),
            ("Multiply", Operation::Arithmetic(ArithOp::Multiply, 12.4)),
            (" divide ", Operation::Arithmetic(ArithOp::Divide, 12.4)),
            ("average", Operation::Grayscale(GrayMethod::Average)),
            ("luminosity", Operation::Grayscale(GrayMethod::Luminosity)),
            ("smoothing", Operation::Smooth),
            ("gaussian", Operation::GaussianBlur),
            ("median", Operation::Median),
            ("sobel", Operation::Sobel),
        ];
        for (name, expected) in cases {
            assert_eq!(Operation::parse(name, 12.4).unwrap(), expected, "{name}");
        }
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            Operation::parse("sepia", 1.0),
            Err(FilterError::Core(Error::InvalidMethod(
                "unknown operation 'sepia'".into()
            )))
        );
    }

    #[test]
    fn test_parse_brightness_rejects_nan() {
        assert!(matches!(
            Operation::parse("brightness", f64::NAN),
            Err(FilterError::Core(Error::InvalidParameter(_)))
        ));
    }

    #[test]
    fn test_name_round_trip() {
        for name in [
            "brightness", "add", "subtract", "multiply", "divide", "average", "luminosity",
            "smoothing", "gaussian", "median", "sobel",
        ] {
            assert_eq!(Operation::parse(name, 1.0).unwrap().name(), name);
        }
    }

    #[test]
    fn test_apply_brightness_scenario() {
        let data = vec![
            10, 10, 10, 255, 20, 20, 20, 255, //
            30, 30, 30, 255, 40, 40, 40, 255,
        ];
        let raster = Raster::from_rgba(2, 2, data).unwrap();
        let out = Operation::Brightness(5).apply(&raster).unwrap();
        assert_eq!(
            out.data(),
            &[
                15, 15, 15, 255, 25, 25, 25, 255, //
                35, 35, 35, 255, 45, 45, 45, 255,
            ]
        );
    }

    #[test]
    fn test_apply_all_chains_and_aborts() {
        let raster = Raster::filled(3, 3, [100, 50, 20, 255]).unwrap();
        let out = apply_all(
            &raster,
            &[
                Operation::Arithmetic(ArithOp::Multiply, 2.0),
                Operation::Brightness(-10),
            ],
        )
        .unwrap();
        assert!(out.pixels().all(|p| p == [190, 90, 30, 255]));

        let err = apply_all(
            &raster,
            &[
                Operation::Median,
                Operation::Arithmetic(ArithOp::Divide, 0.0),
                Operation::Sobel,
            ],
        );
        assert_eq!(err, Err(FilterError::Core(Error::DivisionByZero)));
    }

    #[test]
    fn test_apply_all_empty_is_clone() {
        let raster = Raster::filled(2, 2, [1, 2, 3, 4]).unwrap();
        assert_eq!(apply_all(&raster, &[]).unwrap(), raster);
    }

    #[test]
    fn test_display() {
        assert_eq!(Operation::Brightness(-3).to_string(), "brightness(-3)");
        assert_eq!(
            Operation::Arithmetic(ArithOp::Multiply, 1.5).to_string(),
            "multiply(1.5)"
        );
        assert_eq!(
            Operation::Convolve(Kernel::gaussian()).to_string(),
            "convolve(3x3)"
        );
        assert_eq!(Operation::Sobel.to_string(), "sobel");
    }
}
