//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat, PageArgs};
use crate::config::{load_config, PagyConfig};
use crate::error::Result;
use crate::link::build_url;
use crate::pagination::SeriesSize;
use crate::pager::Pager;
use crate::render::Payload;
use crate::styles::{list_builtin_info, StyleRegistry};
use serde_json::{json, Value};
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub fn run(&self) -> Result<()> {
        let config = self.load_config()?;
        let registry = self.load_styles()?;

        match &self.cli.command {
            Commands::Series { page, window } => self.series(&config, page, *window),
            Commands::Nav { page, style } => {
                let config = Self::page_config(&config, page);
                let pager = self.pager(&config, &registry, page)?;
                let style = style.as_deref().unwrap_or(pager.default_style());
                println!("{}", pager.nav(style)?);
                Ok(())
            }
            Commands::NavJs { page, style, id } => {
                let config = Self::page_config(&config, page);
                let pager = self.pager(&config, &registry, page)?;
                let style = style.as_deref().unwrap_or(pager.default_style());
                println!("{}", pager.nav_js(style, id)?.to_html()?);
                Ok(())
            }
            Commands::ComboNavJs { page, style, id } => {
                let config = Self::page_config(&config, page);
                let pager = self.pager(&config, &registry, page)?;
                let style = style.as_deref().unwrap_or(pager.default_style());
                println!("{}", pager.combo_nav_js(style, id)?.to_html()?);
                Ok(())
            }
            Commands::Info { page, item_name } => {
                let config = Self::page_config(&config, page);
                let pager = self.pager(&config, &registry, page)?;
                println!("{}", pager.info(item_name.as_deref())?);
                Ok(())
            }
            Commands::Url {
                url,
                page,
                param,
                trim,
            } => {
                let param = param.as_deref().unwrap_or(&config.page_param);
                println!("{}", build_url(url, param, *page, *trim)?);
                Ok(())
            }
            Commands::Expand { payload, width } => {
                let payload = Payload::from_json(payload)?;
                println!("{}", payload.expand(*width)?);
                Ok(())
            }
            Commands::Styles => self.list_styles(&registry),
        }
    }

    /// Load configuration
    fn load_config(&self) -> Result<PagyConfig> {
        match &self.cli.config {
            Some(path) => {
                debug!(path = %path.display(), "loading config");
                load_config(path)
            }
            None => Ok(PagyConfig::default()),
        }
    }

    /// Load custom styles, if any
    fn load_styles(&self) -> Result<StyleRegistry> {
        let mut registry = StyleRegistry::new();
        if let Some(path) = &self.cli.styles {
            let count = registry.load_file(path)?;
            debug!(path = %path.display(), count, "loaded custom styles");
        }
        Ok(registry)
    }

    /// Apply the per-command overrides to the loaded config
    fn page_config(config: &PagyConfig, args: &PageArgs) -> PagyConfig {
        let mut config = config.clone();
        if let Some(items) = args.items {
            config.items = items;
        }
        if args.trim {
            config.trim = true;
        }
        config
    }

    fn pager<'a>(
        &self,
        config: &'a PagyConfig,
        registry: &'a StyleRegistry,
        args: &PageArgs,
    ) -> Result<Pager<'a>> {
        Ok(Pager::with_config(args.count, args.page, &args.url, config)?.with_registry(registry))
    }

    /// Print the series (and one series per breakpoint when configured)
    fn series(&self, config: &PagyConfig, args: &PageArgs, window: Option<u64>) -> Result<()> {
        let mut config = Self::page_config(config, args);
        if let Some(window) = window {
            config.size = SeriesSize::window(window);
            config.breakpoints.clear();
        }
        let registry = StyleRegistry::new();
        let pager = self.pager(&config, &registry, args)?;
        let state = pager.state();

        self.output_message(&json!({
            "type": "SERIES",
            "count": state.count(),
            "page": state.page(),
            "last": state.last(),
            "from": state.from(),
            "to": state.to(),
            "prev": state.prev(),
            "next": state.next(),
            "series": pager.series(),
            "sequels": pager.sequels(),
        }));
        Ok(())
    }

    /// List available styles
    fn list_styles(&self, registry: &StyleRegistry) -> Result<()> {
        let builtin: Vec<Value> = list_builtin_info()
            .into_iter()
            .map(|info| {
                json!({
                    "name": info.name,
                    "framework": info.framework,
                    "description": info.description,
                })
            })
            .collect();

        self.output_message(&json!({
            "type": "STYLES",
            "builtin": builtin,
            "available": registry.names(),
        }));
        Ok(())
    }

    /// Output a message
    fn output_message(&self, msg: &Value) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(msg).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(msg).unwrap_or_default());
            }
        }
    }
}
