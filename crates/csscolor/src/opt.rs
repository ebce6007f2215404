//! Helper module with the options for emitting highlights.
//!
//! This module provides the options for an [`Emitter`](crate::Emitter) and
//! the corresponding builder.
//!
//!
//! # Example
//!
//! ```
//! # use csscolor::opt::Options;
//! let options = Options::builder()
//!     .namespace("scssColor")
//!     .build();
//!
//! assert_eq!(options.namespace(), "scssColor");
//! assert_eq!(options.cluster(), "cssColors");
//! ```

/// The diagnostic logging volume.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Volume {
    /// Log nothing.
    #[default]
    Silent,
    /// Log each named color definition.
    Regular,
    /// Log each directive.
    Detailed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OptionData {
    volume: Volume,
    namespace: String,
    cluster: String,
    contained: bool,
}

impl OptionData {
    pub fn new() -> Self {
        Self {
            volume: Volume::Silent,
            namespace: "cssColor".to_string(),
            cluster: "cssColors".to_string(),
            contained: true,
        }
    }
}

/// A builder of options objects.
#[derive(Debug)]
pub struct OptionBuilder(OptionData);

impl OptionBuilder {
    /// Set the volume.
    pub fn volume(&mut self, volume: Volume) -> &mut Self {
        self.0.volume = volume;
        self
    }

    /// Set the namespace, which prefixes the names of derived highlight groups.
    pub fn namespace<S: Into<String>>(&mut self, namespace: S) -> &mut Self {
        self.0.namespace = namespace.into();
        self
    }

    /// Set the name of the cluster collecting all derived groups.
    pub fn cluster<S: Into<String>>(&mut self, cluster: S) -> &mut Self {
        self.0.cluster = cluster.into();
        self
    }

    /// Set whether keywords only match inside other syntax items.
    pub fn contained(&mut self, contained: bool) -> &mut Self {
        self.0.contained = contained;
        self
    }

    /// Instantiate the options.
    pub fn build(&self) -> Options {
        Options(self.0.clone())
    }
}

/// An options object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options(OptionData);

impl Default for Options {
    fn default() -> Self {
        Options(OptionData::new())
    }
}

impl Options {
    /// Create a new builder with the default option values.
    pub fn builder() -> OptionBuilder {
        OptionBuilder(OptionData::new())
    }

    /// Instantiate the default options but with regular logging enabled.
    pub fn with_log() -> Options {
        Self::builder().volume(Volume::Regular).build()
    }

    /// Instantiate the default options but with detailed logging enabled.
    pub fn with_detailed_log() -> Options {
        Self::builder().volume(Volume::Detailed).build()
    }

    /// Get the volume.
    pub fn volume(&self) -> Volume {
        self.0.volume
    }

    /// Get the namespace for highlight groups.
    pub fn namespace(&self) -> &str {
        &self.0.namespace
    }

    /// Get the cluster name.
    pub fn cluster(&self) -> &str {
        &self.0.cluster
    }

    /// Determine whether keywords are contained.
    pub fn contained(&self) -> bool {
        self.0.contained
    }
}

#[cfg(test)]
mod test {
    use super::{Options, Volume};

    #[test]
    fn test_options() {
        let options = Options::default();
        assert_eq!(options.volume(), Volume::Silent);
        assert_eq!(options.namespace(), "cssColor");
        assert_eq!(options.cluster(), "cssColors");
        assert!(options.contained(), "keywords should be contained by default");

        assert_eq!(Options::with_log().volume(), Volume::Regular);
        assert_eq!(Options::with_detailed_log().volume(), Volume::Detailed);

        let options = Options::builder()
            .cluster("lessColors")
            .contained(false)
            .build();
        assert_eq!(options.cluster(), "lessColors");
        assert!(!options.contained(), "builder should override containment");
        assert_eq!(options.namespace(), "cssColor");
    }
}
