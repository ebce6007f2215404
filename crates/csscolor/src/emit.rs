//! Emitting highlight directives for colors.

use log::debug;

use crate::contrast::calc_fg;
use crate::host::{Directive, Host};
use crate::named;
use crate::opt::{Options, Volume};
use crate::string::{code_to_rgb, rgb_to_code};
use crate::trans::Translator;

/// An emitter of highlight directives.
///
/// An emitter resolves color codes to GUI and terminal colors and sends the
/// resulting directives to its [`Host`]. It owns the [`Translator`] and hence
/// the cache of palette lookups, so an application should keep one emitter
/// around for as long as the host is running.
///
/// ```
/// # use csscolor::Emitter;
/// # use csscolor::host::{Directive, Recorder};
/// let mut emitter = Emitter::new(Recorder::new());
/// emitter.add_syntax_keyword("#FF0000", "red")?;
///
/// let directives = emitter.host().directives();
/// assert_eq!(directives.len(), 3);
/// assert_eq!(
///     directives[2].to_string(),
///     "hi cssColorFF0000 guifg=#FFFFFF guibg=#FF0000 ctermfg=15 ctermbg=9"
/// );
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub struct Emitter<H> {
    host: H,
    translator: Translator,
    options: Options,
}

impl<H: Host> Emitter<H> {
    /// Create a new emitter with default options.
    pub fn new(host: H) -> Self {
        Self::with_options(host, Options::default())
    }

    /// Create a new emitter with the given options.
    pub fn with_options(host: H, options: Options) -> Self {
        Self {
            host,
            translator: Translator::new(),
            options,
        }
    }

    /// Access the host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Access the host mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consume this emitter and return its host.
    pub fn into_host(self) -> H {
        self.host
    }

    /// Access the translator.
    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    /// Access the options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Derive the highlight group name for the given color code.
    ///
    /// The name is the namespace followed by the color code without its
    /// leading `#`. Since color codes are unique, so are the names.
    pub fn group_name(&self, code: &str) -> String {
        let digits = code.strip_prefix('#').unwrap_or(code);
        format!("{}{}", self.options.namespace(), digits)
    }

    fn send(&mut self, directive: &Directive) -> std::io::Result<()> {
        if self.options.volume() == Volume::Detailed {
            debug!("{}", directive);
        }
        self.host.execute(directive)
    }

    /// Define a highlight group for the given background color.
    ///
    /// The background color is passed on as GUI color verbatim. The foreground
    /// color is black or white, whichever is more legible. The terminal colors
    /// are the palette colors closest to the two.
    pub fn add_highlight(&mut self, group: &str, code: &str) -> std::io::Result<()> {
        let bg = code_to_rgb(code);
        let fg = calc_fg(bg);
        let ctermfg = self.translator.rgb_to_index(fg);
        let ctermbg = self.translator.rgb_to_index(bg);

        self.send(&Directive::Highlight {
            group: group.to_string(),
            guifg: rgb_to_code(fg),
            guibg: code.to_string(),
            ctermfg,
            ctermbg,
        })
    }

    /// Define a syntax keyword for the given color.
    ///
    /// This method registers the keyword with the color's group, adds the
    /// group to the cluster, and then defines the group's highlight.
    pub fn add_syntax_keyword(&mut self, code: &str, keyword: &str) -> std::io::Result<()> {
        let group = self.group_name(code);

        self.send(&Directive::SyntaxKeyword {
            group: group.clone(),
            keyword: keyword.to_string(),
            contained: self.options.contained(),
        })?;
        self.send(&Directive::ClusterAdd {
            cluster: self.options.cluster().to_string(),
            group: group.clone(),
        })?;
        self.add_highlight(&group, code)
    }

    /// Define syntax keywords for all named colors.
    ///
    /// This method processes the basic colors before the extended colors.
    /// Names sharing a color code share a group, whose highlight is defined
    /// again for every such name.
    pub fn define_named_colors(&mut self) -> std::io::Result<()> {
        let verbose = self.options.volume() != Volume::Silent;
        if verbose {
            debug!(
                "defining {} named colors",
                named::BASIC_COLORS.len() + named::EXTENDED_COLORS.len()
            );
        }

        for (code, name) in named::all() {
            self.add_syntax_keyword(code, name)?;
        }

        if verbose {
            let stats = self.translator.stats();
            debug!(
                "defined named colors with {} distinct palette lookups",
                stats.size
            );
        }
        Ok(())
    }
}
