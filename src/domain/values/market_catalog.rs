//! Static market reference data: commodity futures, sector baskets,
//! business groups and colloquial brand names.
//!
//! Table order matters. The resolver walks sectors and groups in the order
//! listed here and stops at the first substring hit.

/// Exchange suffix appended to bare NSE tickers.
pub const MARKET_SUFFIX: &str = ".NS";

/// Names that resolve straight to the commodity view.
pub const COMMODITY_NAMES: &[&str] = &[
    "GOLD",
    "SILVER",
    "OIL",
    "CRUDE",
    "CRUDE OIL",
    "BRENT OIL",
    "NATURAL GAS",
    "COPPER",
];

/// Tokens that switch any query to the commodity view.
pub const COMMODITY_TOKENS: &[&str] = &["COMMODITY", "COMMODITIES"];

/// (friendly name, futures ticker)
pub const COMMODITY_TICKERS: &[(&str, &str)] = &[
    ("Gold", "GC=F"),
    ("Silver", "SI=F"),
    ("Crude Oil", "CL=F"),
    ("Brent Oil", "BZ=F"),
    ("Natural Gas", "NG=F"),
    ("Copper", "HG=F"),
];

pub struct Basket {
    pub key: &'static str,
    pub display: &'static str,
    pub symbols: &'static [&'static str],
}

const BANK_STOCKS: &[&str] = &[
    "HDFCBANK.NS",
    "ICICIBANK.NS",
    "SBIN.NS",
    "AXISBANK.NS",
    "KOTAKBANK.NS",
];

pub const SECTORS: &[Basket] = &[
    Basket { key: "BANK", display: "Bank", symbols: BANK_STOCKS },
    Basket { key: "BANKING", display: "Banking", symbols: BANK_STOCKS },
    Basket {
        key: "AUTO",
        display: "Auto",
        symbols: &["TATAMOTORS.NS", "M&M.NS", "MARUTI.NS", "BAJAJ-AUTO.NS"],
    },
    Basket {
        key: "IT",
        display: "IT",
        symbols: &["TCS.NS", "INFY.NS", "HCLTECH.NS", "WIPRO.NS", "TECHM.NS"],
    },
    Basket {
        key: "FMCG",
        display: "FMCG",
        symbols: &["ITC.NS", "HINDUNILVR.NS", "NESTLEIND.NS", "BRITANNIA.NS"],
    },
    Basket {
        key: "METAL",
        display: "Metal",
        symbols: &["TATASTEEL.NS", "HINDALCO.NS", "VEDL.NS", "JSWSTEEL.NS"],
    },
];

pub const GROUPS: &[Basket] = &[
    Basket {
        key: "TATA",
        display: "Tata",
        symbols: &["TCS.NS", "TATAMOTORS.NS", "TATASTEEL.NS", "TITAN.NS", "TRENT.NS", "TATAPOWER.NS"],
    },
    Basket {
        key: "RELIANCE",
        display: "Reliance",
        symbols: &["RELIANCE.NS", "JIOFIN.NS", "JUSTDIAL.NS"],
    },
    Basket {
        key: "ADANI",
        display: "Adani",
        symbols: &["ADANIENT.NS", "ADANIPORTS.NS", "ADANIGREEN.NS", "ADANIPOWER.NS"],
    },
    Basket {
        key: "MAHINDRA",
        display: "Mahindra",
        symbols: &["M&M.NS", "TECHM.NS", "M&MFIN.NS"],
    },
    Basket {
        key: "HDFC",
        display: "Hdfc",
        symbols: &["HDFCBANK.NS", "HDFCLIFE.NS", "HDFCAMC.NS"],
    },
];

/// (brand alias, canonical ticker, parent company)
pub const BRANDS: &[(&str, &str, Option<&str>)] = &[
    ("DMART", "AVENUESUPER.NS", Some("Avenue Supermarts")),
    ("DOMINOS", "JUBLFOOD.NS", Some("Jubilant FoodWorks")),
    ("DOMINO'S", "JUBLFOOD.NS", Some("Jubilant FoodWorks")),
    ("ZOMATO", "ZOMATO.NS", None),
    ("SWIGGY", "SWIGGY.NS", None),
    ("PAYTM", "PAYTM.NS", Some("One 97 Communications")),
    ("MAGGI", "NESTLEIND.NS", Some("Nestle India")),
    ("JAGUAR", "TATAMOTORS.NS", Some("Tata Motors")),
    ("PIZZA HUT", "DEVYANI.NS", Some("Devyani International")),
    ("KFC", "DEVYANI.NS", Some("Devyani International")),
    ("ZUDIO", "TRENT.NS", Some("Trent")),
    ("WESTSIDE", "TRENT.NS", Some("Trent")),
    ("GOOGLE", "GOOGL", Some("Alphabet")),
];

/// (display name, index ticker, reference price, change, percent change)
/// used when the live index quote is unavailable.
pub const INDICES: &[(&str, &str, Option<(f64, f64, f64)>)] = &[
    ("NIFTY 50", "^NSEI", Some((26218.0, -18.0, -0.07))),
    ("SENSEX", "^BSESN", None),
];

pub const TICKER_SYMBOLS: &[&str] = &[
    "RELIANCE.NS",
    "TCS.NS",
    "HDFCBANK.NS",
    "INFY.NS",
    "ICICIBANK.NS",
    "SBIN.NS",
    "ITC.NS",
    "TATAMOTORS.NS",
];

pub fn brand(alias: &str) -> Option<(&'static str, Option<&'static str>)> {
    BRANDS
        .iter()
        .find(|(name, _, _)| *name == alias)
        .map(|(_, symbol, parent)| (*symbol, *parent))
}
