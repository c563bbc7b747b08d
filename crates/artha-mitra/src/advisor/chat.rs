//! Keyword-matched advisory chat. Purely reactive: one fixed response per
//! topic bucket, no conversational memory, no link to analysis state.

/// Topic buckets scanned first-match, each keyed by English and Devanagari
/// keywords. Note "save" also matches "savings" by substring.
const TOPICS: &[(&[&str], &str)] = &[
    (
        &["loan", "ऋण"],
        "आप MUDRA Loan (₹10 लाख तक) या Kisan Credit Card के लिए आवेदन कर सकते हैं। क्या आप किसान हैं या व्यवसायी?",
    ),
    (
        &["insurance", "बीमा"],
        "PM Jeevan Jyoti (₹330/वर्ष) और PM Suraksha Bima (₹12/वर्ष) सबसे सस्ती बीमा योजनाएं हैं। दोनों के लिए बैंक खाता जरूरी है।",
    ),
    (
        &["pension", "पेंशन"],
        "Atal Pension Yojana में ₹210/माह से शुरू करें। 60 साल की उम्र में ₹1,000-5,000 मासिक पेंशन मिलेगी।",
    ),
    (
        &["save", "बचत"],
        "अपनी आय का 20% बचत करने की कोशिश करें। पहले आपातकालीन फंड (6 महीने का खर्च) बनाएं।",
    ),
    (
        &["bank", "खाता"],
        "Jan Dhan Yojana के तहत मुफ्त बैंक खाता खोलें। आधार कार्ड लेकर नजदीकी बैंक जाएं।",
    ),
];

const FALLBACK: &str = "मैं आपकी वित्तीय सलाह में मदद कर सकता हूं। आप loan, insurance, pension, savings या bank account के बारे में पूछ सकते हैं।";

/// First-match keyword scan. Callers are expected to lowercase the message;
/// the Devanagari keywords are unaffected by case folding.
pub fn respond(message: &str) -> &'static str {
    for (keywords, reply) in TOPICS {
        if keywords.iter().any(|keyword| message.contains(keyword)) {
            return reply;
        }
    }
    FALLBACK
}
