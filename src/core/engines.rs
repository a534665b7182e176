//! Filepath: src/core/engines.rs
//! Static search-engine registry.
//!
//! Every entry maps an engine id to the base URL a query is appended to.
//! The table is immutable; lookups go through a lazily built index map
//! that preserves declaration order (used by the `engines` listing).

use std::fmt;
use std::sync::LazyLock;

use indexmap::IndexMap;

/// Engine used when nothing else is selected or an id is unknown.
pub const DEFAULT_ENGINE: &str = "google";

/// Display grouping for the `engines` listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    General,
    Regional,
    GoogleOperators,
    BingOperators,
    DdgOperators,
    Code,
    Security,
    Social,
    Video,
    Images,
    Academic,
    Documents,
    News,
    Business,
    Archives,
    Leaks,
    DarkWeb,
    Knowledge,
    Maps,
    Transport,
    Legal,
    Shopping,
    Misc,
}

impl Category {
    pub const ALL: [Category; 23] = [
        Category::General,
        Category::Regional,
        Category::GoogleOperators,
        Category::BingOperators,
        Category::DdgOperators,
        Category::Code,
        Category::Security,
        Category::Social,
        Category::Video,
        Category::Images,
        Category::Academic,
        Category::Documents,
        Category::News,
        Category::Business,
        Category::Archives,
        Category::Leaks,
        Category::DarkWeb,
        Category::Knowledge,
        Category::Maps,
        Category::Transport,
        Category::Legal,
        Category::Shopping,
        Category::Misc,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::General => "General Search",
            Category::Regional => "Regional",
            Category::GoogleOperators => "Google Operators",
            Category::BingOperators => "Bing Operators",
            Category::DdgOperators => "DuckDuckGo Operators",
            Category::Code => "Code & Dev",
            Category::Security => "Security & OSINT",
            Category::Social => "Social Media",
            Category::Video => "Video & Media",
            Category::Images => "Images",
            Category::Academic => "Academic",
            Category::Documents => "Documents",
            Category::News => "News",
            Category::Business => "Business",
            Category::Archives => "Archives",
            Category::Leaks => "Leaks & Pastebins",
            Category::DarkWeb => "Dark Web",
            Category::Knowledge => "Knowledge",
            Category::Maps => "Maps",
            Category::Transport => "Transportation & Tracking",
            Category::Legal => "Legal & Gov",
            Category::Shopping => "E-Commerce",
            Category::Misc => "Miscellaneous",
        }
    }

    /// Case-insensitive match against the label or the short variant name
    pub fn from_name(name: &str) -> Option<Category> {
        let wanted = name.trim().to_ascii_lowercase();
        Category::ALL.into_iter().find(|c| {
            c.label().to_ascii_lowercase() == wanted
                || format!("{c:?}").to_ascii_lowercase() == wanted
        })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One registry entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Engine {
    pub id: &'static str,
    pub base_url: &'static str,
    pub category: Category,
}

const fn e(id: &'static str, base_url: &'static str, category: Category) -> Engine {
    Engine { id, base_url, category }
}

use Category::*;

static ENGINES: &[Engine] = &[
    // General
    e("google", "https://www.google.com/search?q=", General),
    e("bing", "https://www.bing.com/search?q=", General),
    e("ddg", "https://duckduckgo.com/?q=", General),
    e("duckduckgo", "https://duckduckgo.com/?q=", General),
    e("yandex", "https://yandex.com/search/?text=", General),
    e("baidu", "https://www.baidu.com/s?wd=", General),
    e("yahoo", "https://search.yahoo.com/search?p=", General),
    e("brave", "https://search.brave.com/search?q=", General),
    e("startpage", "https://www.startpage.com/do/search?q=", General),
    e("qwant", "https://www.qwant.com/?q=", General),
    e("ecosia", "https://www.ecosia.org/search?q=", General),
    e("mojeek", "https://www.mojeek.com/search?q=", General),
    e("swisscows", "https://swisscows.com/web?query=", General),
    e("searx", "https://searx.be/search?q=", General),
    e("metager", "https://metager.org/meta/meta.ger3?eingabe=", General),
    e("dogpile", "https://www.dogpile.com/serp?q=", General),
    e("aol", "https://search.aol.com/aol/search?q=", General),
    e("ask", "https://www.ask.com/web?q=", General),
    e("lycos", "https://search.lycos.com/web/?q=", General),
    e("webcrawler", "https://www.webcrawler.com/serp?q=", General),
    e("exalead", "https://www.exalead.com/search/web/results/?q=", General),
    e("millionshort", "https://millionshort.com/search?keywords=", General),
    e("carrot2", "https://search.carrot2.org/#/search/web/", General),
    e("marginalia", "https://search.marginalia.nu/search?query=", General),
    e("wiby", "https://wiby.me/?q=", General),
    // Regional
    e("naver", "https://search.naver.com/search.naver?query=", Regional),
    e("sogou", "https://www.sogou.com/web?query=", Regional),
    e("seznam", "https://search.seznam.cz/?q=", Regional),
    e("coccoc", "https://coccoc.com/search?query=", Regional),
    // Google operator shortcuts (operator is part of the base)
    e("google-site", "https://www.google.com/search?q=site:", GoogleOperators),
    e("google-filetype", "https://www.google.com/search?q=filetype:", GoogleOperators),
    e("google-ext", "https://www.google.com/search?q=ext:", GoogleOperators),
    e("google-intitle", "https://www.google.com/search?q=intitle:", GoogleOperators),
    e("google-inurl", "https://www.google.com/search?q=inurl:", GoogleOperators),
    e("google-intext", "https://www.google.com/search?q=intext:", GoogleOperators),
    e("google-related", "https://www.google.com/search?q=related:", GoogleOperators),
    e("google-define", "https://www.google.com/search?q=define:", GoogleOperators),
    e("google-weather", "https://www.google.com/search?q=weather:", GoogleOperators),
    e("google-stocks", "https://www.google.com/search?q=stocks:", GoogleOperators),
    e("google-movie", "https://www.google.com/search?q=movie:", GoogleOperators),
    e("google-map", "https://www.google.com/search?q=map:", GoogleOperators),
    e("google-recent", "https://www.google.com/search?tbs=qdr:m&q=", GoogleOperators),
    e("google-year", "https://www.google.com/search?tbs=qdr:y&q=", GoogleOperators),
    e("google-verbatim", "https://www.google.com/search?tbs=li:1&q=", GoogleOperators),
    // Bing operator shortcuts
    e("bing-site", "https://www.bing.com/search?q=site:", BingOperators),
    e("bing-filetype", "https://www.bing.com/search?q=filetype:", BingOperators),
    e("bing-intitle", "https://www.bing.com/search?q=intitle:", BingOperators),
    e("bing-inurl", "https://www.bing.com/search?q=inurl:", BingOperators),
    e("bing-inbody", "https://www.bing.com/search?q=inbody:", BingOperators),
    // DuckDuckGo operator shortcuts
    e("ddg-site", "https://duckduckgo.com/?q=site:", DdgOperators),
    e("ddg-filetype", "https://duckduckgo.com/?q=filetype:", DdgOperators),
    e("ddg-intitle", "https://duckduckgo.com/?q=intitle:", DdgOperators),
    e("ddg-inurl", "https://duckduckgo.com/?q=inurl:", DdgOperators),
    // Code & developer
    e("github", "https://github.com/search?q=", Code),
    e("github-code", "https://github.com/search?type=code&q=", Code),
    e("gitlab", "https://gitlab.com/search?search=", Code),
    e("bitbucket", "https://bitbucket.org/repo/all?name=", Code),
    e("searchcode", "https://searchcode.com/?q=", Code),
    e("sourcegraph", "https://sourcegraph.com/search?q=", Code),
    e("npm", "https://www.npmjs.com/search?q=", Code),
    e("pypi", "https://pypi.org/search/?q=", Code),
    e("crates", "https://crates.io/search?q=", Code),
    e("packagist", "https://packagist.org/?query=", Code),
    e("rubygems", "https://rubygems.org/search?query=", Code),
    e("dockerhub", "https://hub.docker.com/search?q=", Code),
    e("stackoverflow", "https://stackoverflow.com/search?q=", Code),
    e("gist", "https://gist.github.com/search?q=", Code),
    // Security & OSINT
    e("shodan", "https://www.shodan.io/search?query=", Security),
    e("censys", "https://search.censys.io/search?resource=hosts&q=", Security),
    e("zoomeye", "https://www.zoomeye.org/searchResult?q=", Security),
    e("fofa", "https://en.fofa.info/result?qbase64=", Security),
    e("binaryedge", "https://app.binaryedge.io/services/query?query=", Security),
    e("greynoise", "https://viz.greynoise.io/query?gnql=", Security),
    e("onyphe", "https://www.onyphe.io/search?q=", Security),
    e("hunter", "https://hunter.io/search/", Security),
    e("intelx", "https://intelx.io/?s=", Security),
    e("leakix", "https://leakix.net/search?scope=leak&q=", Security),
    e("pulsedive", "https://pulsedive.com/indicator/?ioc=", Security),
    e(
        "threatcrowd",
        "https://www.threatcrowd.org/searchApi/v2/domain/report/?domain=",
        Security,
    ),
    e("virustotal", "https://www.virustotal.com/gui/search/", Security),
    e("urlscan", "https://urlscan.io/search/#", Security),
    e("crtsh", "https://crt.sh/?q=", Security),
    e("dnsdumpster", "https://dnsdumpster.com/?search=", Security),
    e("securitytrails", "https://securitytrails.com/domain/", Security),
    e("fullhunt", "https://fullhunt.io/search?query=", Security),
    e("netlas", "https://app.netlas.io/responses/?q=", Security),
    e("publicwww", "https://publicwww.com/websites/", Security),
    e("spyonweb", "https://spyonweb.com/", Security),
    // Social
    e("twitter", "https://twitter.com/search?q=", Social),
    e("x", "https://twitter.com/search?q=", Social),
    e("reddit", "https://www.reddit.com/search/?q=", Social),
    e("linkedin", "https://www.linkedin.com/search/results/all/?keywords=", Social),
    e("facebook", "https://www.facebook.com/search/top?q=", Social),
    e("instagram", "https://www.instagram.com/explore/tags/", Social),
    e("tiktok", "https://www.tiktok.com/search?q=", Social),
    e("pinterest", "https://www.pinterest.com/search/pins/?q=", Social),
    e("tumblr", "https://www.tumblr.com/search/", Social),
    e("mastodon", "https://mastodon.social/tags/", Social),
    e("bluesky", "https://bsky.app/search?q=", Social),
    e("threads", "https://www.threads.net/search?q=", Social),
    e("quora", "https://www.quora.com/search?q=", Social),
    e("hackernews", "https://hn.algolia.com/?q=", Social),
    e("lobsters", "https://lobste.rs/search?q=", Social),
    e("discord", "https://disboard.org/search?keyword=", Social),
    e("telegram", "https://t.me/s/", Social),
    // Video & media
    e("youtube", "https://www.youtube.com/results?search_query=", Video),
    e("vimeo", "https://vimeo.com/search?q=", Video),
    e("dailymotion", "https://www.dailymotion.com/search/", Video),
    e("twitch", "https://www.twitch.tv/search?term=", Video),
    e("rumble", "https://rumble.com/search/video?q=", Video),
    e("odysee", "https://odysee.com/$/search?q=", Video),
    e("peertube", "https://sepiasearch.org/search?search=", Video),
    e("bitchute", "https://www.bitchute.com/search/?query=", Video),
    e("google-videos", "https://www.google.com/search?tbm=vid&q=", Video),
    e("bing-videos", "https://www.bing.com/videos/search?q=", Video),
    // Images
    e("google-images", "https://www.google.com/search?tbm=isch&q=", Images),
    e("bing-images", "https://www.bing.com/images/search?q=", Images),
    e("yandex-images", "https://yandex.com/images/search?text=", Images),
    e("flickr", "https://www.flickr.com/search/?text=", Images),
    e("unsplash", "https://unsplash.com/s/photos/", Images),
    e("pexels", "https://www.pexels.com/search/", Images),
    e("pixabay", "https://pixabay.com/images/search/", Images),
    e("tineye", "https://tineye.com/search?url=", Images),
    e("imgur", "https://imgur.com/search?q=", Images),
    e("giphy", "https://giphy.com/search/", Images),
    e("deviantart", "https://www.deviantart.com/search?q=", Images),
    e("artstation", "https://www.artstation.com/search?q=", Images),
    e("wikimedia", "https://commons.wikimedia.org/w/index.php?search=", Images),
    // Academic
    e("scholar", "https://scholar.google.com/scholar?q=", Academic),
    e("semantic-scholar", "https://www.semanticscholar.org/search?q=", Academic),
    e("pubmed", "https://pubmed.ncbi.nlm.nih.gov/?term=", Academic),
    e("arxiv", "https://arxiv.org/search/?query=", Academic),
    e("base", "https://www.base-search.net/Search/Results?lookfor=", Academic),
    e("core", "https://core.ac.uk/search?q=", Academic),
    e("scilit", "https://www.scilit.net/articles/search?q=", Academic),
    e(
        "dimensions",
        "https://app.dimensions.ai/discover/publication?search_text=",
        Academic,
    ),
    e("researchgate", "https://www.researchgate.net/search/publication?q=", Academic),
    e("jstor", "https://www.jstor.org/action/doBasicSearch?Query=", Academic),
    e("ieee", "https://ieeexplore.ieee.org/search/searchresult.jsp?queryText=", Academic),
    e("acm", "https://dl.acm.org/action/doSearch?AllField=", Academic),
    e("worldcat", "https://www.worldcat.org/search?q=", Academic),
    e("openlibrary", "https://openlibrary.org/search?q=", Academic),
    e("gutenberg", "https://www.gutenberg.org/ebooks/search/?query=", Academic),
    // Documents
    e("scribd", "https://www.scribd.com/search?query=", Documents),
    e("slideshare", "https://www.slideshare.net/search?q=", Documents),
    e("issuu", "https://issuu.com/search?q=", Documents),
    e("pdfdrive", "https://www.pdfdrive.com/search?q=", Documents),
    e("zlibrary", "https://z-lib.io/s/", Documents),
    e("libgen", "https://libgen.is/search.php?req=", Documents),
    e("prezi", "https://prezi.com/explore/search/#search=", Documents),
    e("google-books", "https://www.google.com/search?tbm=bks&q=", Documents),
    e("hathitrust", "https://babel.hathitrust.org/cgi/ls?q1=", Documents),
    e("docplayer", "https://docplayer.net/search/?q=", Documents),
    // News
    e("google-news", "https://news.google.com/search?q=", News),
    e("bing-news", "https://www.bing.com/news/search?q=", News),
    e("yahoo-news", "https://news.search.yahoo.com/search?p=", News),
    e("reuters", "https://www.reuters.com/site-search/?query=", News),
    e("bbc", "https://www.bbc.co.uk/search?q=", News),
    e("cnn", "https://www.cnn.com/search?q=", News),
    e("nytimes", "https://www.nytimes.com/search?query=", News),
    e("guardian", "https://www.theguardian.com/search?q=", News),
    e("apnews", "https://apnews.com/search?q=", News),
    // Business
    e("crunchbase", "https://www.crunchbase.com/textsearch?q=", Business),
    e("opencorporates", "https://opencorporates.com/companies?q=", Business),
    e(
        "dnb",
        "https://www.dnb.com/business-directory/company-search.html?term=",
        Business,
    ),
    e("bloomberg", "https://www.bloomberg.com/search?query=", Business),
    e("zoominfo", "https://www.zoominfo.com/c/search?q=", Business),
    e("glassdoor", "https://www.glassdoor.com/Search/results.htm?keyword=", Business),
    e("indeed", "https://www.indeed.com/jobs?q=", Business),
    // Archives
    e("archive", "https://web.archive.org/web/*/", Archives),
    e("archive-search", "https://web.archive.org/cdx/search/cdx?url=", Archives),
    e("archive-today", "https://archive.today/search/?q=", Archives),
    e("cachedview", "https://cachedview.nl/", Archives),
    e(
        "google-cache",
        "https://webcache.googleusercontent.com/search?q=cache:",
        Archives,
    ),
    // Pastebins & leaks
    e("pastebin", "https://pastebin.com/search?q=", Leaks),
    e("paste-search", "https://psbdmp.ws/search/", Leaks),
    e("dehashed", "https://dehashed.com/search?query=", Leaks),
    e("haveibeenpwned", "https://haveibeenpwned.com/unifiedsearch/", Leaks),
    e("leakcheck", "https://leakcheck.io/search?query=", Leaks),
    e("snusbase", "https://snusbase.com/search?q=", Leaks),
    // Dark web clearnet front-ends
    e("ahmia", "https://ahmia.fi/search/?q=", DarkWeb),
    e("torch", "https://torchsearch.net/search?query=", DarkWeb),
    e("onionland", "https://onionlandsearchengine.net/search?q=", DarkWeb),
    // Knowledge
    e("wikipedia", "https://en.wikipedia.org/w/index.php?search=", Knowledge),
    e("wikidata", "https://www.wikidata.org/w/index.php?search=", Knowledge),
    e("wikihow", "https://www.wikihow.com/wikiHowTo?search=", Knowledge),
    e("britannica", "https://www.britannica.com/search?query=", Knowledge),
    e("wolfram", "https://www.wolframalpha.com/input?i=", Knowledge),
    // Maps
    e("google-maps", "https://www.google.com/maps/search/", Maps),
    e("openstreetmap", "https://www.openstreetmap.org/search?query=", Maps),
    e("bing-maps", "https://www.bing.com/maps?q=", Maps),
    e("yandex-maps", "https://yandex.com/maps/?text=", Maps),
    // Transportation
    e("flightradar", "https://www.flightradar24.com/", Transport),
    e("flightaware", "https://flightaware.com/live/flight/", Transport),
    e("marinetraffic", "https://www.marinetraffic.com/en/ais/details/ships/", Transport),
    e("vesselfinder", "https://www.vesselfinder.com/?name=", Transport),
    // Government & legal
    e("courtlistener", "https://www.courtlistener.com/?q=", Legal),
    e("pacer", "https://pcl.uscourts.gov/pcl/pages/search/results.xhtml?q=", Legal),
    e("sec-edgar", "https://www.sec.gov/cgi-bin/srch-ia?text=", Legal),
    e("regulations-gov", "https://www.regulations.gov/search?filter=", Legal),
    e("offshoreleaks", "https://offshoreleaks.icij.org/search?q=", Legal),
    e("aleph-occrp", "https://aleph.occrp.org/search?q=", Legal),
    e("littlesis", "https://littlesis.org/search?q=", Legal),
    e("wikileaks", "https://search.wikileaks.org/?q=", Legal),
    // E-commerce
    e("amazon", "https://www.amazon.com/s?k=", Shopping),
    e("ebay", "https://www.ebay.com/sch/i.html?_nkw=", Shopping),
    e("aliexpress", "https://www.aliexpress.com/wholesale?SearchText=", Shopping),
    e("etsy", "https://www.etsy.com/search?q=", Shopping),
    e("producthunt", "https://www.producthunt.com/search?q=", Shopping),
    // Misc
    e("whois", "https://who.is/whois/", Misc),
    e("domaintools", "https://whois.domaintools.com/", Misc),
    e("builtwith", "https://builtwith.com/", Misc),
    e("wappalyzer", "https://www.wappalyzer.com/lookup/", Misc),
    e("archive-org", "https://archive.org/search?query=", Misc),
    e("internetarchive", "https://archive.org/search?query=", Misc),
    e("snopes", "https://www.snopes.com/?s=", Misc),
    e("factcheck", "https://www.factcheck.org/?s=", Misc),
];

static REGISTRY: LazyLock<IndexMap<&'static str, &'static Engine>> =
    LazyLock::new(|| ENGINES.iter().map(|eng| (eng.id, eng)).collect());

/// Look up an engine by exact (already lowercased) id
pub fn lookup(id: &str) -> Option<&'static Engine> {
    REGISTRY.get(id).copied()
}

pub fn is_known(id: &str) -> bool {
    REGISTRY.contains_key(id)
}

/// Base URL for `id`, falling back to the default engine
pub fn base_url(id: &str) -> &'static str {
    lookup(id)
        .or_else(|| lookup(DEFAULT_ENGINE))
        .map(|eng| eng.base_url)
        .unwrap_or("https://www.google.com/search?q=")
}

/// All engines in declaration order
pub fn all() -> impl Iterator<Item = &'static Engine> {
    REGISTRY.values().copied()
}

pub fn count() -> usize {
    REGISTRY.len()
}

/// Engines grouped by category, categories in display order
pub fn by_category() -> IndexMap<Category, Vec<&'static Engine>> {
    let mut groups: IndexMap<Category, Vec<&'static Engine>> =
        Category::ALL.iter().map(|c| (*c, Vec::new())).collect();

    for eng in all() {
        groups.entry(eng.category).or_default().push(eng);
    }

    groups.retain(|_, engines| !engines.is_empty());
    groups
}
