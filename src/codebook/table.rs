/// Escape code: exactly one verbatim byte follows
pub const ESCAPE_BYTE: u8 = 254;

/// Escape code: a length byte N follows, then N verbatim bytes
pub const ESCAPE_RUN: u8 = 255;

/// Maximum payload of a single run escape (limited by its 1-byte length field)
pub const MAX_RUN_LEN: usize = 255;

/// Maximum number of codebook entries (codes 0-253)
pub const MAX_CODES: usize = 254;

/// Longest pattern allowed in a codebook
pub const MAX_PATTERN_LEN: usize = 7;

/// The standard smaz codebook. A pattern's code is its index.
pub const STANDARD_PATTERNS: [&[u8]; MAX_CODES] = [
    b" ", b"the", b"e", b"t", b"a", b"of", b"o", b"and", // 0-7
    b"i", b"n", b"s", b"e ", b"r", b" th", b" t", b"in", // 8-15
    b"he", b"th", b"h", b"he ", b"to", b"\r\n", b"l", b"s ", // 16-23
    b"d", b" a", b"an", b"er", b"c", b" o", b"d ", b"on", // 24-31
    b" of", b"re", b"of ", b"t ", b", ", b"is", b"u", b"at", // 32-39
    b"   ", b"n ", b"or", b"which", b"f", b"m", b"as", b"it", // 40-47
    b"that", b"\n", b"was", b"en", b"  ", b" w", b"es", b" an", // 48-55
    b" i", b"\r", b"f ", b"g", b"p", b"nd", b" s", b"nd ", // 56-63
    b"ed ", b"w", b"ed", b"http://", b"for", b"te", b"ing", b"y ", // 64-71
    b"The", b" c", b"ti", b"r ", b"his", b"st", b" in", b"ar", // 72-79
    b"nt", b",", b" to", b"y", b"ng", b" h", b"with", b"le", // 80-87
    b"al", b"to ", b"b", b"ou", b"be", b"were", b" b", b"se", // 88-95
    b"o ", b"ent", b"ha", b"ng ", b"their", b"\"", b"hi", b"from", // 96-103
    b" f", b"in ", b"de", b"ion", b"me", b"v", b".", b"ve", // 104-111
    b"all", b"re ", b"ri", b"ro", b"is ", b"co", b"f t", b"are", // 112-119
    b"ea", b". ", b"her", b" m", b"er ", b" p", b"es ", b"by", // 120-127
    b"they", b"di", b"ra", b"ic", b"not", b"s, ", b"d t", b"at ", // 128-135
    b"ce", b"la", b"h ", b"ne", b"as ", b"tio", b"on ", b"n t", // 136-143
    b"io", b"we", b" a ", b"om", b", a", b"s o", b"ur", b"li", // 144-151
    b"ll", b"ch", b"had", b"this", b"e t", b"g ", b"e\r\n", b" wh", // 152-159
    b"ere", b" co", b"e o", b"a ", b"us", b" d", b"ss", b"\n\r\n", // 160-167
    b"\r\n\r", b"=\"", b" be", b" e", b"s a", b"ma", b"one", b"t t", // 168-175
    b"or ", b"but", b"el", b"so", b"l ", b"e s", b"s,", b"no", // 176-183
    b"ter", b" wa", b"iv", b"ho", b"e a", b" r", b"hat", b"s t", // 184-191
    b"ns", b"ch ", b"wh", b"tr", b"ut", b"/", b"have", b"ly ", // 192-199
    b"ta", b" ha", b" on", b"tha", b"-", b" l", b"ati", b"en ", // 200-207
    b"pe", b" re", b"there", b"ass", b"si", b" fo", b"wa", b"ec", // 208-215
    b"our", b"who", b"its", b"z", b"fo", b"rs", b">", b"ot", // 216-223
    b"un", b"<", b"im", b"th ", b"nc", b"ate", b"><", b"ver", // 224-231
    b"ad", b" we", b"ly", b"ee", b" n", b"id", b" cl", b"ac", // 232-239
    b"il", b"</", b"rt", b" wi", b"div", b"e, ", b" it", b"whi", // 240-247
    b" ma", b"ge", b"x", b"e c", b"men", b".com", // 248-253
];
