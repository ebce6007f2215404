//! The host editor as a sink for directives.
//!
//! An [`Emitter`](crate::Emitter) never talks to an editor directly. Instead,
//! it hands [`Directive`]s to a [`Host`]. This module defines both as well as
//! two hosts, [`Recorder`] for collecting directives in memory and
//! [`ScriptWriter`] for writing them out as editor commands.

use std::io::Write;

/// A directive for the host editor.
///
/// The display of a directive is the corresponding Vim command.
///
/// ```
/// # use csscolor::host::Directive;
/// let directive = Directive::ClusterAdd {
///     cluster: "cssColors".to_string(),
///     group: "cssColorFF0000".to_string(),
/// };
/// assert_eq!(directive.to_string(), "syn cluster cssColors add=cssColorFF0000");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Directive {
    /// Define a highlight group with GUI and terminal colors.
    Highlight {
        group: String,
        guifg: String,
        guibg: String,
        ctermfg: u8,
        ctermbg: u8,
    },
    /// Define a keyword as member of a syntax group.
    SyntaxKeyword {
        group: String,
        keyword: String,
        contained: bool,
    },
    /// Add a syntax group to a cluster.
    ClusterAdd { cluster: String, group: String },
}

impl Directive {
    /// Get the name of the group this directive defines or updates.
    pub fn group(&self) -> &str {
        match *self {
            Self::Highlight { ref group, .. }
            | Self::SyntaxKeyword { ref group, .. }
            | Self::ClusterAdd { ref group, .. } => group,
        }
    }
}

impl core::fmt::Display for Directive {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match *self {
            Self::Highlight {
                ref group,
                ref guifg,
                ref guibg,
                ctermfg,
                ctermbg,
            } => write!(
                f,
                "hi {} guifg={} guibg={} ctermfg={} ctermbg={}",
                group, guifg, guibg, ctermfg, ctermbg
            ),
            Self::SyntaxKeyword {
                ref group,
                ref keyword,
                contained,
            } => {
                write!(f, "syn keyword {} {}", group, keyword)?;
                if contained {
                    f.write_str(" contained")?;
                }
                Ok(())
            }
            Self::ClusterAdd {
                ref cluster,
                ref group,
            } => {
                write!(f, "syn cluster {} add={}", cluster, group)
            }
        }
    }
}

// ====================================================================================================================

/// A host editor.
///
/// Hosts execute directives in order. They do not answer, but executing a
/// directive may fail, e.g., because the host writes the directive to a file.
pub trait Host {
    /// Execute the directive.
    fn execute(&mut self, directive: &Directive) -> std::io::Result<()>;
}

impl<H: Host + ?Sized> Host for &mut H {
    fn execute(&mut self, directive: &Directive) -> std::io::Result<()> {
        (**self).execute(directive)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A host that records all directives in memory.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    directives: Vec<Directive>,
}

impl Recorder {
    /// Create a new, empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded directives in execution order.
    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    /// Get the highlight directives for the given group.
    pub fn highlights<'a>(&'a self, group: &'a str) -> impl Iterator<Item = &'a Directive> + 'a {
        self.directives
            .iter()
            .filter(move |d| matches!(**d, Directive::Highlight { .. }) && d.group() == group)
    }

    /// Clear all recorded directives.
    pub fn clear(&mut self) {
        self.directives.clear();
    }
}

impl Host for Recorder {
    fn execute(&mut self, directive: &Directive) -> std::io::Result<()> {
        self.directives.push(directive.clone());
        Ok(())
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A host that writes each directive as a line of text.
///
/// The output is a script the editor can source.
#[derive(Debug)]
pub struct ScriptWriter<W: Write> {
    writer: W,
}

impl<W: Write> ScriptWriter<W> {
    /// Create a new script writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Flush the underlying writer and return it.
    pub fn into_inner(mut self) -> std::io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> Host for ScriptWriter<W> {
    fn execute(&mut self, directive: &Directive) -> std::io::Result<()> {
        writeln!(self.writer, "{}", directive)
    }
}

#[cfg(test)]
mod test {
    use super::{Directive, Host, Recorder, ScriptWriter};

    fn highlight() -> Directive {
        Directive::Highlight {
            group: "cssColorFF0000".to_string(),
            guifg: "#FFFFFF".to_string(),
            guibg: "#FF0000".to_string(),
            ctermfg: 15,
            ctermbg: 9,
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(
            highlight().to_string(),
            "hi cssColorFF0000 guifg=#FFFFFF guibg=#FF0000 ctermfg=15 ctermbg=9"
        );

        let keyword = Directive::SyntaxKeyword {
            group: "cssColorFF0000".to_string(),
            keyword: "red".to_string(),
            contained: true,
        };
        assert_eq!(keyword.to_string(), "syn keyword cssColorFF0000 red contained");
        assert_eq!(keyword.group(), "cssColorFF0000");

        let keyword = Directive::SyntaxKeyword {
            group: "cssColorFF0000".to_string(),
            keyword: "red".to_string(),
            contained: false,
        };
        assert_eq!(keyword.to_string(), "syn keyword cssColorFF0000 red");
    }

    #[test]
    fn test_hosts() -> std::io::Result<()> {
        let mut recorder = Recorder::new();
        recorder.execute(&highlight())?;
        assert_eq!(recorder.directives(), &[highlight()]);
        assert_eq!(recorder.highlights("cssColorFF0000").count(), 1);
        assert_eq!(recorder.highlights("cssColor000000").count(), 0);
        recorder.clear();
        assert!(recorder.directives().is_empty(), "cleared recorder should be empty");

        let mut writer = ScriptWriter::new(Vec::new());
        writer.execute(&highlight())?;
        writer.execute(&Directive::ClusterAdd {
            cluster: "cssColors".to_string(),
            group: "cssColorFF0000".to_string(),
        })?;
        let script = String::from_utf8(writer.into_inner()?).map_err(std::io::Error::other)?;
        assert_eq!(
            script,
            "hi cssColorFF0000 guifg=#FFFFFF guibg=#FF0000 ctermfg=15 ctermbg=9\n\
             syn cluster cssColors add=cssColorFF0000\n"
        );

        Ok(())
    }
}
