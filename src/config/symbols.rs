//! Built-in list of USDT-margined futures symbols to scan

/// Base assets scanned each pass, in scan order.
pub const DEFAULT_SYMBOLS: &[&str] = &[
    "BTC", "ETH", "XRP", "LTC", "BNB", "ADA", "BAT", "ETC", "XLM", "ZRX", "DOGE", "PIXEL",
    "JUP", "ALT", "MANTA", "XAI", "1000RATS", "1000SATS", "JTO", "PYTH", "ORDI", "MEME", "TIA",
    "BSV", "BIGTIME", "LOOM", "GLMR", "CYBER", "SEI", "YGG", "AGLD", "ARKM", "PENDLE", "WLD",
    "XVG", "MDT", "MAV", "COMBO", "KEY", "UMA", "RAD", "IDEX", "EDU", "XVS", "HFT", "RDNT",
    "LEVER", "ID", "LQTY", "TRU", "CKB", "SSV", "ACH", "BNX", "STX", "CFX", "GMX", "AGIX",
    "MINA", "RNDR", "MAGIC", "HOOK", "FRAX", "CVX", "LDO", "LUN2", "DAR", "JASMY", "WOO",
    "APE", "GMT", "IMX", "PEOPLE", "ENS", "ARPA", "KLAY", "AR", "CELO", "1000XEC", "DYDX",
    "C98", "AUDIO", "IOTX", "BAKE", "NKN", "HOT", "DENT", "CHR", "COTI", "SFP", "UNFI", "LIT",
    "GRT", "ALPHA", "AXS", "CTK", "BEL", "RSR", "FIL", "AAVE", "KSM", "FLM", "AVAX", "RUNE",
    "CRV", "DOT", "SXP", "OMG", "TRX", "BCH", "ATOM", "NEO", "VET", "QTUM", "ONT", "KNC",
    "COMP", "MKR", "ONE", "BAND", "STORJ", "UNI", "SOL", "EGLD", "ZEN", "1INCH", "FTM",
    "MATIC", "MANA", "ALGO", "LINK", "EOS", "ENJ", "NEAR", "SUSHI", "LRC", "LPT", "SLP", "CHZ",
    "OGN", "GALA", "TLM", "SNX", "API3", "BNT", "FLOW", "GTC", "THETA", "OCEAN", "CELR", "SKL",
    "WAXP", "FET", "ICP", "OP", "ROSE", "RARE", "ASTR", "GAL", "SAND", "QNT", "STG", "KAVA",
    "APT", "MASK", "STMX", "POLYX", "IOST", "ARB", "FLOKI", "BLUR", "ANKR", "HBAR", "ICX",
    "IOTA", "RVN", "WAVES", "XTZ", "ZIL", "ORBS", "SUI", "ZETA", "ACE",
];
