//! Built-in catalogs for the standard naming convention: channels, sources,
//! mediums (with per-source suggestions), and country/language codes.
//! User-defined options from the local store extend these at the UI layer.

/// A selectable catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogOption {
    pub value: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

/// A plain code/name pair for countries and languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn opt(value: &'static str, label: &'static str, description: &'static str) -> CatalogOption {
    CatalogOption {
        value,
        label,
        description,
    }
}

pub const CHANNELS: &[CatalogOption] = &[
    opt("search", "Search", "Traffic from search engines, organic or paid."),
    opt("social", "Social", "Traffic from social networks, organic or paid."),
    opt("email", "Email", "Traffic from email marketing campaigns and newsletters."),
    opt("display", "Display", "Traffic from graphical ads on websites."),
    opt("referral", "Referral", "Traffic from links on other websites."),
    opt("affiliates", "Affiliates", "Traffic from affiliate programs."),
    opt("direct", "Direct", "Direct traffic, the user typed the URL."),
    opt("video", "Video", "Traffic from video platforms such as YouTube."),
    opt("audio", "Audio", "Traffic from audio platforms such as podcasts or Spotify."),
    opt("print", "Print", "Traffic from print media such as magazines or newspapers."),
    opt("offline", "Offline", "Traffic from offline media such as TV, radio, or events."),
];

pub const SOURCES: &[CatalogOption] = &[
    opt("google", "Google", "Traffic from Google (search, display, YouTube)."),
    opt("facebook", "Facebook", "Traffic from Facebook."),
    opt("instagram", "Instagram", "Traffic from Instagram."),
    opt("tiktok", "TikTok", "Traffic from TikTok."),
    opt("linkedin", "LinkedIn", "Traffic from LinkedIn."),
    opt("twitter", "Twitter/X", "Traffic from Twitter/X."),
    opt("pinterest", "Pinterest", "Traffic from Pinterest."),
    opt("youtube", "YouTube", "Traffic from YouTube."),
    opt("bing", "Bing", "Traffic from Bing."),
    opt("newsletter", "Newsletter", "Traffic from newsletters."),
    opt("blog", "Blog", "Traffic from blogs."),
    opt("partner", "Partner", "Traffic from partners."),
    opt("affiliate", "Affiliate", "Traffic from affiliates."),
    opt("direct", "Direct", "Direct traffic."),
    opt("referral", "Referral", "Traffic from referrals."),
    opt("display", "Display", "Traffic from display ads."),
    opt("email", "Email", "Traffic from emails."),
    opt("sms", "SMS", "Traffic from SMS."),
    opt("push", "Push", "Traffic from push notifications."),
    opt("print", "Print", "Traffic from print media."),
    opt("tv", "TV", "Traffic from television."),
    opt("radio", "Radio", "Traffic from radio."),
    opt("event", "Event", "Traffic from events."),
    opt("qr", "QR", "Traffic from QR codes."),
];

pub const MEDIUMS: &[CatalogOption] = &[
    opt("cpc", "CPC", "Cost per click, for pay-per-click campaigns."),
    opt("ppc", "PPC", "Pay per click, similar to CPC."),
    opt("organic", "Organic", "Organic, unpaid traffic."),
    opt("social", "Social", "Organic social traffic."),
    opt("email", "Email", "Email campaign traffic."),
    opt("referral", "Referral", "Referral or recommendation traffic."),
    opt("display", "Display", "Graphical ads on websites."),
    opt("banner", "Banner", "Banner ads."),
    opt("retargeting", "Retargeting", "Remarketing or retargeting campaigns."),
    opt("affiliate", "Affiliate", "Affiliate program traffic."),
    opt("video", "Video", "Video-format ads."),
    opt("native", "Native", "Native advertising blended with content."),
    opt("influencer", "Influencer", "Influencer campaigns."),
    opt("sms", "SMS", "SMS campaigns."),
    opt("push", "Push", "Push notifications."),
    opt("qr", "QR", "QR codes."),
    opt("print", "Print", "Print media."),
    opt("tv", "TV", "Television."),
    opt("radio", "Radio", "Radio."),
    opt("direct", "Direct", "Direct traffic."),
];

const GOOGLE_MEDIUMS: &[CatalogOption] = &[
    opt("cpc", "CPC", "Pay-per-click ads on Google Ads."),
    opt("organic", "Organic", "Organic Google search results."),
    opt("display", "Display", "Ads on the Google display network."),
    opt("video", "Video", "Video ads on YouTube."),
    opt("shopping", "Shopping", "Product ads on Google Shopping."),
    opt("discovery", "Discovery", "Ads on Google Discover."),
];

const FACEBOOK_MEDIUMS: &[CatalogOption] = &[
    opt("cpc", "CPC", "Pay-per-click ads on Facebook Ads."),
    opt("social", "Social", "Organic Facebook posts."),
    opt("display", "Display", "Graphical ads on Facebook."),
    opt("video", "Video", "Video ads on Facebook."),
    opt("carousel", "Carousel", "Carousel ads on Facebook."),
    opt("lead", "Lead", "Lead-generation ads on Facebook."),
];

const INSTAGRAM_MEDIUMS: &[CatalogOption] = &[
    opt("cpc", "CPC", "Pay-per-click ads on Instagram."),
    opt("social", "Social", "Organic Instagram posts."),
    opt("display", "Display", "Graphical ads on Instagram."),
    opt("video", "Video", "Video ads on Instagram."),
    opt("story", "Story", "Ads in Instagram Stories."),
    opt("reel", "Reel", "Ads in Instagram Reels."),
];

const TIKTOK_MEDIUMS: &[CatalogOption] = &[
    opt("cpc", "CPC", "Pay-per-click ads on TikTok."),
    opt("social", "Social", "Organic TikTok content."),
    opt("video", "Video", "Video ads on TikTok."),
    opt("spark", "Spark Ads", "Spark Ads on TikTok."),
];

const LINKEDIN_MEDIUMS: &[CatalogOption] = &[
    opt("cpc", "CPC", "Pay-per-click ads on LinkedIn."),
    opt("social", "Social", "Organic LinkedIn posts."),
    opt("inmail", "InMail", "Sponsored InMail messages on LinkedIn."),
    opt("lead", "Lead Gen", "Lead-generation ads on LinkedIn."),
];

const TWITTER_MEDIUMS: &[CatalogOption] = &[
    opt("cpc", "CPC", "Pay-per-click ads on Twitter."),
    opt("social", "Social", "Organic tweets."),
    opt("follower", "Follower", "Follower campaigns on Twitter."),
];

const NEWSLETTER_MEDIUMS: &[CatalogOption] = &[
    opt("email", "Email", "Email marketing campaigns."),
    opt("newsletter", "Newsletter", "Informational newsletters."),
];

const BLOG_MEDIUMS: &[CatalogOption] = &[
    opt("content", "Content", "Blog content."),
    opt("organic", "Organic", "Organic blog traffic."),
];

const YOUTUBE_MEDIUMS: &[CatalogOption] = &[
    opt("video", "Video", "Videos on YouTube."),
    opt("organic", "Organic", "Organic YouTube content."),
    opt("cpc", "CPC", "Paid ads on YouTube."),
];

const DIRECT_MEDIUMS: &[CatalogOption] = &[
    opt("none", "None", "No specific medium."),
    opt("direct", "Direct", "Direct traffic."),
];

const REFERRAL_MEDIUMS: &[CatalogOption] = &[opt("referral", "Referral", "Referral traffic.")];

const PARTNER_MEDIUMS: &[CatalogOption] = &[
    opt("partner", "Partner", "Partner traffic."),
    opt("affiliate", "Affiliate", "Affiliate traffic."),
];

const EMAIL_MEDIUMS: &[CatalogOption] = &[
    opt("email", "Email", "Email marketing campaigns."),
    opt("newsletter", "Newsletter", "Informational newsletters."),
    opt("promotion", "Promotion", "Promotional emails."),
    opt("transactional", "Transactional", "Transactional emails."),
];

const SMS_MEDIUMS: &[CatalogOption] = &[
    opt("sms", "SMS", "SMS messages."),
    opt("promotion", "Promotion", "Promotional SMS."),
];

const PRINT_MEDIUMS: &[CatalogOption] = &[
    opt("print", "Print", "Print media."),
    opt("magazine", "Magazine", "Magazines."),
    opt("newspaper", "Newspaper", "Newspapers."),
    opt("brochure", "Brochure", "Brochures."),
];

const TV_MEDIUMS: &[CatalogOption] = &[
    opt("tv", "TV", "Television."),
    opt("commercial", "Commercial", "Commercial spots."),
];

const RADIO_MEDIUMS: &[CatalogOption] = &[
    opt("radio", "Radio", "Radio."),
    opt("commercial", "Commercial", "Commercial spots."),
];

const EVENT_MEDIUMS: &[CatalogOption] = &[
    opt("event", "Event", "Events."),
    opt("conference", "Conference", "Conferences."),
    opt("tradeshow", "Tradeshow", "Trade shows."),
];

const QR_MEDIUMS: &[CatalogOption] = &[opt("qr", "QR", "QR codes.")];

/// Suggested mediums for a given source. Falls back to the full medium
/// catalog for sources without a curated list.
pub fn medium_options_for(source: &str) -> &'static [CatalogOption] {
    match source {
        "google" => GOOGLE_MEDIUMS,
        "facebook" => FACEBOOK_MEDIUMS,
        "instagram" => INSTAGRAM_MEDIUMS,
        "tiktok" => TIKTOK_MEDIUMS,
        "linkedin" => LINKEDIN_MEDIUMS,
        "twitter" => TWITTER_MEDIUMS,
        "newsletter" => NEWSLETTER_MEDIUMS,
        "blog" => BLOG_MEDIUMS,
        "youtube" => YOUTUBE_MEDIUMS,
        "direct" => DIRECT_MEDIUMS,
        "referral" => REFERRAL_MEDIUMS,
        "partner" => PARTNER_MEDIUMS,
        "email" => EMAIL_MEDIUMS,
        "sms" => SMS_MEDIUMS,
        "print" => PRINT_MEDIUMS,
        "tv" => TV_MEDIUMS,
        "radio" => RADIO_MEDIUMS,
        "event" => EVENT_MEDIUMS,
        "qr" => QR_MEDIUMS,
        _ => MEDIUMS,
    }
}

pub const COUNTRIES: &[CodeOption] = &[
    CodeOption { value: "es", label: "Spain" },
    CodeOption { value: "mx", label: "Mexico" },
    CodeOption { value: "co", label: "Colombia" },
    CodeOption { value: "ar", label: "Argentina" },
    CodeOption { value: "cl", label: "Chile" },
    CodeOption { value: "pe", label: "Peru" },
    CodeOption { value: "us", label: "United States" },
    CodeOption { value: "ca", label: "Canada" },
    CodeOption { value: "br", label: "Brazil" },
    CodeOption { value: "pt", label: "Portugal" },
    CodeOption { value: "fr", label: "France" },
    CodeOption { value: "it", label: "Italy" },
    CodeOption { value: "de", label: "Germany" },
    CodeOption { value: "uk", label: "United Kingdom" },
    CodeOption { value: "jp", label: "Japan" },
    CodeOption { value: "cn", label: "China" },
    CodeOption { value: "au", label: "Australia" },
    CodeOption { value: "nz", label: "New Zealand" },
    CodeOption { value: "za", label: "South Africa" },
    CodeOption { value: "in", label: "India" },
    CodeOption { value: "ru", label: "Russia" },
    CodeOption { value: "ae", label: "United Arab Emirates" },
    CodeOption { value: "sa", label: "Saudi Arabia" },
    CodeOption { value: "eg", label: "Egypt" },
    CodeOption { value: "ng", label: "Nigeria" },
    CodeOption { value: "ke", label: "Kenya" },
    CodeOption { value: "ma", label: "Morocco" },
    CodeOption { value: "th", label: "Thailand" },
    CodeOption { value: "sg", label: "Singapore" },
    CodeOption { value: "my", label: "Malaysia" },
    CodeOption { value: "id", label: "Indonesia" },
    CodeOption { value: "ph", label: "Philippines" },
    CodeOption { value: "vn", label: "Vietnam" },
    CodeOption { value: "kr", label: "South Korea" },
    CodeOption { value: "tr", label: "Turkey" },
    CodeOption { value: "il", label: "Israel" },
    CodeOption { value: "se", label: "Sweden" },
    CodeOption { value: "no", label: "Norway" },
    CodeOption { value: "dk", label: "Denmark" },
    CodeOption { value: "fi", label: "Finland" },
    CodeOption { value: "nl", label: "Netherlands" },
    CodeOption { value: "be", label: "Belgium" },
    CodeOption { value: "ch", label: "Switzerland" },
    CodeOption { value: "at", label: "Austria" },
    CodeOption { value: "gr", label: "Greece" },
    CodeOption { value: "pl", label: "Poland" },
    CodeOption { value: "cz", label: "Czech Republic" },
    CodeOption { value: "hu", label: "Hungary" },
    CodeOption { value: "ro", label: "Romania" },
    CodeOption { value: "bg", label: "Bulgaria" },
];

pub const LANGUAGES: &[CodeOption] = &[
    CodeOption { value: "es", label: "Spanish" },
    CodeOption { value: "en", label: "English" },
    CodeOption { value: "fr", label: "French" },
    CodeOption { value: "de", label: "German" },
    CodeOption { value: "it", label: "Italian" },
    CodeOption { value: "pt", label: "Portuguese" },
    CodeOption { value: "ru", label: "Russian" },
    CodeOption { value: "zh", label: "Chinese" },
    CodeOption { value: "ja", label: "Japanese" },
    CodeOption { value: "ko", label: "Korean" },
    CodeOption { value: "ar", label: "Arabic" },
    CodeOption { value: "hi", label: "Hindi" },
    CodeOption { value: "bn", label: "Bengali" },
    CodeOption { value: "nl", label: "Dutch" },
    CodeOption { value: "sv", label: "Swedish" },
    CodeOption { value: "no", label: "Norwegian" },
    CodeOption { value: "da", label: "Danish" },
    CodeOption { value: "fi", label: "Finnish" },
    CodeOption { value: "pl", label: "Polish" },
    CodeOption { value: "tr", label: "Turkish" },
    CodeOption { value: "he", label: "Hebrew" },
    CodeOption { value: "th", label: "Thai" },
    CodeOption { value: "vi", label: "Vietnamese" },
    CodeOption { value: "id", label: "Indonesian" },
    CodeOption { value: "ms", label: "Malay" },
    CodeOption { value: "tl", label: "Tagalog" },
];

/// Find a catalog entry by its value.
pub fn find_option<'a>(catalog: &'a [CatalogOption], value: &str) -> Option<&'a CatalogOption> {
    catalog.iter().find(|o| o.value == value)
}

/// Find a country or language entry by its code.
pub fn find_code<'a>(catalog: &'a [CodeOption], value: &str) -> Option<&'a CodeOption> {
    catalog.iter().find(|o| o.value == value)
}
