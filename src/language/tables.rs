// Reference tables for the built-in profiles.
// Letter values are percentages; n-gram values are relative frequencies (0-1).

pub const ENGLISH_LETTERS: [f64; 26] = [
    8.12, 1.49, 2.78, 4.25, 12.02, 2.23, 2.02, 6.09, 6.97, 0.15, 0.77, 4.03, 2.41, // A-M
    6.75, 7.51, 1.93, 0.10, 5.99, 6.33, 9.06, 2.76, 0.98, 2.36, 0.15, 1.97, 0.07, // N-Z
];

pub const ENGLISH_BIGRAMS: &[(&str, f64)] = &[
    ("TH", 0.0271),
    ("HE", 0.0233),
    ("IN", 0.0203),
    ("ER", 0.0178),
    ("AN", 0.0161),
    ("RE", 0.0141),
    ("ED", 0.0117),
    ("ND", 0.0107),
    ("ON", 0.0106),
    ("EN", 0.0105),
    ("AT", 0.0103),
    ("OU", 0.0102),
    ("IT", 0.0100),
    ("IS", 0.0098),
    ("OR", 0.0091),
    ("TI", 0.0089),
    ("AS", 0.0087),
    ("TE", 0.0087),
    ("ET", 0.0076),
    ("NG", 0.0076),
    ("OF", 0.0075),
    ("AL", 0.0074),
    ("DE", 0.0070),
    ("SE", 0.0068),
    ("LE", 0.0066),
    ("SA", 0.0063),
    ("SI", 0.0062),
    ("AR", 0.0062),
    ("VE", 0.0058),
    ("RA", 0.0057),
    ("LD", 0.0057),
    ("UR", 0.0056),
    ("TA", 0.0056),
    ("RI", 0.0055),
    ("NE", 0.0055),
];

pub const ENGLISH_TRIGRAMS: &[(&str, f64)] = &[
    ("THE", 0.0181),
    ("AND", 0.0073),
    ("ING", 0.0072),
    ("HER", 0.0036),
    ("HAT", 0.0031),
    ("HIS", 0.0031),
    ("THA", 0.0031),
    ("ERE", 0.0031),
    ("FOR", 0.0028),
    ("ENT", 0.0028),
    ("ION", 0.0027),
    ("TER", 0.0024),
    ("HAS", 0.0024),
    ("YOU", 0.0024),
    ("ITH", 0.0023),
    ("VER", 0.0022),
    ("ALL", 0.0022),
    ("WIT", 0.0021),
    ("THI", 0.0021),
    ("TIO", 0.0021),
    ("EST", 0.0020),
    ("ARE", 0.0019),
    ("HEN", 0.0019),
    ("RST", 0.0019),
    ("OUR", 0.0018),
    ("OUT", 0.0018),
    ("HAV", 0.0018),
    ("ATE", 0.0017),
    ("STH", 0.0017),
    ("VED", 0.0017),
];

pub const ENGLISH_WORDS: &[&str] = &[
    "THE", "AND", "FOR", "ARE", "BUT", "NOT", "YOU", "ALL", "CAN", "HER", "WAS", "ONE", "OUR",
    "OUT", "DAY", "GET", "HAS", "HIM", "HIS", "HOW", "ITS", "MAY", "NEW", "NOW", "OLD", "SEE",
    "TWO", "WHO", "BOY", "DID", "MAN", "OWN", "SAY", "SHE", "TOO", "USE", "THAT", "WITH", "FROM",
    "THIS", "HAVE", "WILL", "WHAT", "WHEN", "WHERE", "WHICH", "THERE", "WOULD", "ABOUT", "AFTER",
    "FIRST", "NEVER", "THESE", "THINK", "BEING", "EVERY", "GREAT", "MIGHT", "SHALL", "STILL",
    "THOSE", "UNDER", "WHILE", "COULD",
];

// Only ASCII letters are counted, so Turkish entries use folded spellings
// (Ç->C, Ğ->G, İ->I, Ö->O, Ş->S, Ü->U).
pub const TURKISH_LETTERS: [f64; 26] = [
    11.92, 2.65, 0.96, 4.87, 8.91, 0.41, 1.24, 1.16, 8.60, 0.00, 4.68, 5.92, 3.75, // A-M
    7.23, 2.72, 0.84, 0.00, 6.92, 3.01, 5.71, 3.39, 0.95, 0.00, 0.00, 3.34, 1.52, // N-Z
];

pub const TURKISH_BIGRAMS: &[(&str, f64)] = &[
    ("AR", 0.0241),
    ("LA", 0.0227),
    ("AN", 0.0196),
    ("ER", 0.0187),
    ("IN", 0.0181),
    ("LE", 0.0172),
    ("DE", 0.0150),
    ("EN", 0.0141),
    ("IR", 0.0139),
    ("DA", 0.0129),
    ("RI", 0.0118),
    ("BI", 0.0112),
    ("AL", 0.0109),
    ("KA", 0.0101),
    ("ND", 0.0097),
    ("NI", 0.0094),
    ("MA", 0.0090),
    ("YA", 0.0088),
    ("IL", 0.0084),
    ("EL", 0.0080),
    ("AK", 0.0077),
    ("RA", 0.0075),
    ("LI", 0.0073),
    ("AY", 0.0069),
    ("ES", 0.0066),
];

pub const TURKISH_TRIGRAMS: &[(&str, f64)] = &[
    ("LAR", 0.0102),
    ("LER", 0.0094),
    ("BIR", 0.0071),
    ("INI", 0.0048),
    ("ERI", 0.0046),
    ("ARI", 0.0045),
    ("ANI", 0.0041),
    ("YOR", 0.0039),
    ("DEN", 0.0037),
    ("AND", 0.0035),
    ("ASI", 0.0033),
    ("INE", 0.0031),
    ("ARA", 0.0029),
    ("ILE", 0.0028),
    ("ADA", 0.0027),
    ("ESI", 0.0026),
    ("IND", 0.0025),
    ("OLA", 0.0024),
    ("DAN", 0.0023),
    ("MAK", 0.0022),
];

pub const TURKISH_WORDS: &[&str] = &[
    "BIR", "ICIN", "ILE", "DAHA", "GIBI", "COK", "OLAN", "KADAR", "SONRA", "DIYE", "AMA", "HER",
    "BEN", "SEN", "ONLAR", "VAR", "YOK", "OLARAK", "ANCAK", "BUNU", "BUNA", "DEGIL", "GORE",
    "KENDI", "SADECE", "ZAMAN", "YENI", "BUYUK", "IKI", "OLDU", "TUM", "NASIL", "NEDEN", "BIZ",
];
