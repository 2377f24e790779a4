//! Fixed placeholder content the generator draws from.

/// Candidate competitor names; a generated comparison uses a prefix of this list.
pub const COMPETITOR_NAMES: &[&str] = &[
    "Chic Boutique",
    "Vogue Retail",
    "The Fashion Hub",
    "Modern Attire",
    "Elegant Threads",
    "Urban Styles",
    "Classic Wear",
    "The Trendsetters",
];

/// Fewest competitors in a generated comparison (excluding the primary).
pub const MIN_COMPETITORS: usize = 5;
/// Most competitors in a generated comparison (excluding the primary).
pub const MAX_COMPETITORS: usize = 7;

/// Competitor summaries, assigned round-robin by competitor index.
pub const SENTIMENT_SUMMARIES: &[&str] = &[
    "Customers consistently praise the excellent customer service and friendly staff. However, some reviews mention that prices are slightly higher than competitors. The store's ambiance is often highlighted as a major positive.",
    "Mixed reviews on value, with some customers finding it overpriced. The product selection is generally well-regarded, but stock levels can be inconsistent. Staff helpfulness is a recurring theme.",
    "A popular choice for its competitive pricing and value. While the selection is vast, some customers find the store layout chaotic. The checkout process is frequently mentioned as slow.",
    "Highly rated for its unique selection and modern ambiance. Service receives polarizing reviews, with some finding staff attentive and others dismissive. Returns policy is noted as being strict.",
];

/// Summary attached to the benchmarked retailer's own row.
pub const PRIMARY_SENTIMENT_SUMMARY: &str = "The primary retailer shows strong performance in service and ambiance, attracting positive feedback. However, value perception is an area for improvement, as some customers feel prices don't align with quality. Selection is good but could be expanded to match key competitors.";

/// Base key-mention terms and counts. Terms are unique.
pub const KEY_MENTIONS: &[(&str, u32)] = &[
    ("Helpful Staff", 89),
    ("Clean Store", 72),
    ("Good Prices", 65),
    ("Long Lines", 41),
    ("Easy Returns", 35),
];

/// Number of key mentions attached to each row.
pub const KEY_MENTIONS_PER_ROW: usize = 3;
