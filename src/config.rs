use std::{ffi::OsString, fs, path::PathBuf, str::FromStr};

use serde::Deserialize;

use crate::{
    error::{GenErr, Result},
    storage,
};

/// Default destination of the generated matrix.
pub const DEFAULT_FILENAME: &str = "data/rand.bin";

/// Default amount of rows and columns.
pub const DEFAULT_SIZE: usize = 100;

/// The distribution every cell of the matrix is drawn from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributionConfig {
    /// Uniform over `[0, 1)`.
    #[default]
    Standard,
    Uniform {
        low: f32,
        high: f32,
    },
    Normal {
        mean: f32,
        std_dev: f32,
    },
    Const {
        value: f32,
    },
}

/// Everything needed to produce one matrix file.
///
/// Any field missing from a JSON config falls back to its default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MatrixConfig {
    pub filename: PathBuf,
    pub rows: usize,
    pub cols: usize,
    /// Without a seed the rng is seeded from the OS and every run differs.
    pub seed: Option<u64>,
    pub distribution: DistributionConfig,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self::square(DEFAULT_FILENAME, DEFAULT_SIZE)
    }
}

impl MatrixConfig {
    /// Creates a config for a `size x size` standard uniform matrix.
    ///
    /// # Arguments
    /// * `filename` - The destination file.
    /// * `size` - The amount of rows and columns.
    pub fn square<P: Into<PathBuf>>(filename: P, size: usize) -> Self {
        Self {
            filename: filename.into(),
            rows: size,
            cols: size,
            seed: None,
            distribution: DistributionConfig::Standard,
        }
    }

    /// Sets the seed of the random number generator.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the distribution the cells are drawn from.
    pub fn with_distribution(mut self, distribution: DistributionConfig) -> Self {
        self.distribution = distribution;
        self
    }

    /// The exact size in bytes of the file this config produces, or `None` if the shape
    /// overflows.
    pub fn byte_len(&self) -> Option<usize> {
        storage::byte_len(self.rows, self.cols)
    }

    /// Loads a config from a JSON file.
    ///
    /// # Arguments
    /// * `path` - The path of the JSON file.
    ///
    /// # Returns
    /// An `Io` error if the file can't be read or an `InvalidConfig` if it can't be parsed.
    pub fn from_json_file<P: Into<PathBuf>>(path: P) -> Result<Self> {
        let path = path.into();
        let content = fs::read_to_string(&path)?;
        serde_json::from_str(&content)
            .map_err(|e| GenErr::InvalidConfig(format!("{}: {e}", path.display())))
    }

    /// Parses a config from a JSON string.
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| GenErr::InvalidConfig(e.to_string()))
    }

    /// Builds a config from command line arguments, not including the program name.
    ///
    /// Accepts `[filename] [size]` positionally plus `--rows`, `--cols`, `--seed` and
    /// `--config <path>`. A config file is applied first and every other argument
    /// overrides it, regardless of order.
    ///
    /// # Arguments
    /// * `args` - The arguments to parse.
    ///
    /// # Returns
    /// The resulting config or an `InvalidConfig` describing the offending argument.
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();

        let mut config_path = None;
        let mut positionals = Vec::new();
        let mut rows = None;
        let mut cols = None;
        let mut seed = None;

        let mut it = args.into_iter();
        while let Some(arg) = it.next() {
            if !arg.starts_with("--") {
                positionals.push(arg);
                continue;
            }

            match arg.as_str() {
                "--config" => config_path = Some(flag_value(&arg, it.next())?),
                "--rows" => rows = Some(parse_num(&arg, &flag_value(&arg, it.next())?)?),
                "--cols" => cols = Some(parse_num(&arg, &flag_value(&arg, it.next())?)?),
                "--seed" => seed = Some(parse_num(&arg, &flag_value(&arg, it.next())?)?),
                flag => return Err(GenErr::InvalidConfig(format!("unknown flag: {flag}"))),
            }
        }

        let mut config = match config_path {
            Some(path) => Self::from_json_file(path)?,
            None => Self::default(),
        };

        let mut positionals = positionals.into_iter();
        if let Some(filename) = positionals.next() {
            config.filename = filename.into();
        }

        if let Some(size) = positionals.next() {
            let size = parse_num("size", &size)?;
            config.rows = size;
            config.cols = size;
        }

        if let Some(extra) = positionals.next() {
            return Err(GenErr::InvalidConfig(format!("unexpected argument: {extra}")));
        }

        if let Some(rows) = rows {
            config.rows = rows;
        }

        if let Some(cols) = cols {
            config.cols = cols;
        }

        if seed.is_some() {
            config.seed = seed;
        }

        Ok(config)
    }

    /// Same as `from_args` for raw OS arguments, replacing invalid UTF-8 instead of
    /// panicking.
    pub fn from_os_args<I: IntoIterator<Item = OsString>>(args: I) -> Result<Self> {
        Self::from_args(args.into_iter().map(|arg| arg.to_string_lossy().into_owned()))
    }
}

fn flag_value(flag: &str, value: Option<String>) -> Result<String> {
    value.ok_or_else(|| GenErr::InvalidConfig(format!("missing value for {flag}")))
}

fn parse_num<T: FromStr>(name: &str, value: &str) -> Result<T> {
    value.parse().map_err(|_| {
        GenErr::InvalidConfig(format!("{name} must be a non-negative integer, got {value}"))
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn parse(args: &[&str]) -> Result<MatrixConfig> {
        MatrixConfig::from_args(args.iter().copied())
    }

    #[test]
    fn defaults() {
        let config = parse(&[]).unwrap();

        assert_eq!(config.filename, PathBuf::from("data/rand.bin"));
        assert_eq!((config.rows, config.cols), (100, 100));
        assert_eq!(config.seed, None);
        assert_eq!(config.distribution, DistributionConfig::Standard);
        assert_eq!(config.byte_len(), Some(40_000));
    }

    #[test]
    fn positionals() {
        let config = parse(&["out.bin", "4"]).unwrap();

        assert_eq!(config.filename, PathBuf::from("out.bin"));
        assert_eq!((config.rows, config.cols), (4, 4));
        assert_eq!(config.byte_len(), Some(64));
    }

    #[test]
    fn flags_override_positionals() {
        let config = parse(&["--cols", "3", "out.bin", "4", "--seed", "9"]).unwrap();

        assert_eq!((config.rows, config.cols), (4, 3));
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(matches!(parse(&["--rows"]), Err(GenErr::InvalidConfig(_))));
        assert!(matches!(parse(&["--size", "3"]), Err(GenErr::InvalidConfig(_))));
        assert!(matches!(parse(&["a.bin", "x"]), Err(GenErr::InvalidConfig(_))));
        assert!(matches!(parse(&["a.bin", "-1"]), Err(GenErr::InvalidConfig(_))));
        assert!(matches!(parse(&["a.bin", "1", "2"]), Err(GenErr::InvalidConfig(_))));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_filename_is_replaced() {
        use std::os::unix::ffi::OsStringExt;

        let args = vec![
            OsString::from_vec(vec![b'o', 0xff, b'.', b'b']),
            OsString::from("2"),
        ];

        let config = MatrixConfig::from_os_args(args).unwrap();
        assert_eq!(config.filename, PathBuf::from("o\u{FFFD}.b"));
        assert_eq!((config.rows, config.cols), (2, 2));
    }

    #[test]
    fn partial_json() {
        let config = MatrixConfig::from_json(r#"{ "rows": 2, "seed": 5 }"#).unwrap();

        assert_eq!(config.filename, PathBuf::from(DEFAULT_FILENAME));
        assert_eq!((config.rows, config.cols), (2, DEFAULT_SIZE));
        assert_eq!(config.seed, Some(5));
    }

    #[test]
    fn json_distribution() {
        let json = r#"{ "distribution": { "normal": { "mean": 1.0, "std_dev": 2.0 } } }"#;
        let config = MatrixConfig::from_json(json).unwrap();

        assert_eq!(
            config.distribution,
            DistributionConfig::Normal {
                mean: 1.,
                std_dev: 2.
            }
        );

        let config = MatrixConfig::from_json(r#"{ "distribution": "standard" }"#).unwrap();
        assert_eq!(config.distribution, DistributionConfig::Standard);
    }

    #[test]
    fn invalid_json() {
        assert!(matches!(
            MatrixConfig::from_json("{ rows: 2 }"),
            Err(GenErr::InvalidConfig(_))
        ));
    }

    #[test]
    fn config_file_then_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "filename": "from_file.bin", "rows": 3, "cols": 5 }}"#).unwrap();
        let path = file.path().to_str().unwrap();

        let config = parse(&["--cols", "6", "--config", path]).unwrap();
        assert_eq!(config.filename, PathBuf::from("from_file.bin"));
        assert_eq!((config.rows, config.cols), (3, 6));
    }

    #[test]
    fn missing_config_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let err = MatrixConfig::from_json_file(path).unwrap_err();
        assert!(matches!(err, GenErr::Io(_)));
    }
}
