use clap::Parser;
use log::{info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineArgs {
    #[arg(long, help = "Destination URL the UTM parameters are appended to")]
    pub base_url: Option<String>,

    #[arg(long, help = "Marketing channel (e.g. search, social, email)")]
    pub channel: Option<String>,

    #[arg(long, help = "Traffic source (e.g. google, facebook, newsletter)")]
    pub source: Option<String>,

    #[arg(long, help = "Marketing medium (e.g. cpc, organic, email)")]
    pub medium: Option<String>,

    #[arg(long, help = "Campaign name; normalized into snake_case")]
    pub campaign: Option<String>,

    #[arg(long, help = "Content variant for A/B differentiation")]
    pub content: Option<String>,

    #[arg(long, help = "Paid search keyword")]
    pub term: Option<String>,

    #[arg(long = "tracking-id", help = "Internal tracking identifier")]
    pub tracking_id: Option<String>,

    #[arg(long = "newsletter-slug", help = "Newsletter issue slug")]
    pub newsletter_slug: Option<String>,

    #[arg(
        long = "param",
        value_name = "KEY=VALUE",
        help = "Extra query parameter, may be repeated"
    )]
    pub params: Vec<String>,

    #[arg(long, help = "Classification tag stored with the link")]
    pub category: Option<String>,

    #[arg(long, help = "Owning team stored with the link")]
    pub team: Option<String>,

    #[arg(long, value_delimiter = ',', help = "Comma-separated free-form tags")]
    pub tags: Vec<String>,

    #[arg(long, help = "Country code (e.g. es, us)")]
    pub country: Option<String>,

    #[arg(long, help = "Language code (e.g. es, en)")]
    pub language: Option<String>,

    #[arg(long, help = "Free-text notes stored with the link")]
    pub notes: Option<String>,

    #[arg(
        long = "src-files",
        value_delimiter = ',',
        help = "Comma-separated list of CSV files with parameter rows"
    )]
    pub src_files: Vec<String>,

    #[arg(long, help = "List stored history instead of building a URL")]
    pub history: bool,

    #[arg(
        long,
        value_name = "PATH",
        num_args = 0..=1,
        help = "Export history as CSV, to PATH or to the configured export location"
    )]
    pub export: Option<Option<String>>,

    #[arg(long = "no-save", help = "Do not record the generated URL anywhere")]
    pub no_save: bool,

    #[arg(long, default_value = "settings.json", help = "Path to settings file")]
    pub settings: String,
}

impl CommandLineArgs {
    pub fn parse_args() -> Self {
        let args = CommandLineArgs::parse();

        info!("Parsed {} extra parameter(s) from --param", args.params.len());
        info!("Parsed {} file(s) from --src-files", args.src_files.len());

        args
    }

    /// Split repeated `--param KEY=VALUE` flags into pairs. Entries without
    /// an `=` are skipped with a warning.
    pub fn extra_params(&self) -> Vec<(String, String)> {
        self.params
            .iter()
            .filter_map(|raw| match raw.split_once('=') {
                Some((key, value)) if !key.is_empty() => {
                    Some((key.to_string(), value.to_string()))
                }
                _ => {
                    warn!("Ignoring malformed --param '{}' (expected KEY=VALUE)", raw);
                    None
                }
            })
            .collect()
    }
}
