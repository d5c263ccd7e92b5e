//! Built-in valence lexicon.
//!
//! Mean valence ratings on the `[-4, 4]` scale used by VADER, covering the
//! vocabulary that shows up most in product and service reviews. Load a full
//! VADER lexicon file through [`LexiconSource::File`](super::LexiconSource)
//! for wider coverage.

pub(crate) const EMBEDDED_LEXICON: &[(&str, f64)] = &[
    // positive
    ("acceptable", 1.3),
    ("accessible", 1.2),
    ("accurate", 1.6),
    ("admire", 2.1),
    ("adorable", 2.2),
    ("affordable", 1.6),
    ("amazed", 2.2),
    ("amazing", 2.8),
    ("amusing", 1.8),
    ("appealing", 2.1),
    ("appreciate", 1.7),
    ("attentive", 1.6),
    ("attractive", 1.9),
    ("authentic", 1.6),
    ("awesome", 3.1),
    ("beautiful", 2.9),
    ("beautifully", 2.7),
    ("best", 3.2),
    ("better", 1.9),
    ("bright", 1.9),
    ("brilliant", 2.8),
    ("calm", 1.3),
    ("charming", 2.2),
    ("cheerful", 2.5),
    ("clean", 1.7),
    ("clear", 1.6),
    ("comfortable", 2.3),
    ("comfy", 2.1),
    ("convenient", 1.8),
    ("cool", 1.3),
    ("cozy", 1.9),
    ("crisp", 1.2),
    ("cute", 2.0),
    ("delicious", 2.7),
    ("delight", 2.9),
    ("delighted", 2.8),
    ("delightful", 2.8),
    ("dependable", 1.8),
    ("durable", 1.5),
    ("easy", 1.9),
    ("effective", 2.1),
    ("efficient", 1.8),
    ("elegant", 2.1),
    ("enjoy", 2.2),
    ("enjoyable", 1.9),
    ("enjoyed", 2.3),
    ("excellent", 2.7),
    ("exceptional", 2.6),
    ("excited", 1.4),
    ("exciting", 2.2),
    ("fabulous", 2.4),
    ("fair", 1.3),
    ("fancy", 1.0),
    ("fantastic", 2.6),
    ("fast", 1.2),
    ("favorite", 2.0),
    ("fine", 0.8),
    ("flawless", 2.5),
    ("flavorful", 2.2),
    ("fresh", 1.3),
    ("friendly", 2.2),
    ("fun", 2.3),
    ("generous", 2.3),
    ("gentle", 1.9),
    ("glad", 2.0),
    ("good", 1.9),
    ("gorgeous", 3.0),
    ("great", 3.1),
    ("happy", 2.7),
    ("happier", 2.4),
    ("healthy", 1.7),
    ("helpful", 1.8),
    ("honest", 2.3),
    ("impressed", 2.2),
    ("impressive", 2.3),
    ("incredible", 2.4),
    ("inexpensive", 1.1),
    ("interesting", 1.7),
    ("intuitive", 1.5),
    ("joy", 2.8),
    ("kind", 2.4),
    ("laugh", 2.6),
    ("laughing", 2.2),
    ("like", 1.5),
    ("liked", 1.8),
    ("lovely", 2.8),
    ("love", 3.2),
    ("loved", 2.9),
    ("loves", 2.7),
    ("magnificent", 3.0),
    ("marvelous", 2.9),
    ("neat", 2.0),
    ("nice", 1.8),
    ("ok", 1.2),
    ("okay", 0.9),
    ("outstanding", 3.0),
    ("perfect", 2.7),
    ("perfectly", 3.2),
    ("phenomenal", 2.8),
    ("pleasant", 2.3),
    ("pleased", 1.9),
    ("polite", 1.6),
    ("popular", 1.8),
    ("positive", 2.6),
    ("powerful", 1.8),
    ("pretty", 2.2),
    ("professional", 1.3),
    ("quick", 1.0),
    ("quiet", 0.6),
    ("recommend", 1.5),
    ("recommended", 1.7),
    ("refreshing", 2.0),
    ("reliable", 1.8),
    ("responsive", 1.4),
    ("rich", 2.6),
    ("safe", 1.9),
    ("satisfied", 1.8),
    ("satisfying", 2.0),
    ("smooth", 1.4),
    ("solid", 1.6),
    ("spacious", 1.5),
    ("special", 1.7),
    ("spectacular", 2.6),
    ("stunning", 2.8),
    ("stylish", 1.8),
    ("success", 2.7),
    ("superb", 3.1),
    ("supportive", 2.2),
    ("sweet", 2.0),
    ("tasty", 2.0),
    ("tender", 1.8),
    ("terrific", 2.7),
    ("thanks", 1.9),
    ("thank", 1.5),
    ("tidy", 1.5),
    ("top", 0.8),
    ("useful", 1.9),
    ("valuable", 2.1),
    ("warm", 0.9),
    ("welcoming", 1.9),
    ("win", 2.8),
    ("wonderful", 2.7),
    ("worth", 0.9),
    ("worthy", 1.9),
    ("wow", 2.8),
    // negative
    ("abysmal", -2.8),
    ("angry", -2.3),
    ("annoyed", -1.6),
    ("annoying", -1.8),
    ("anxious", -1.0),
    ("appalling", -2.9),
    ("arrogant", -2.2),
    ("ashamed", -2.1),
    ("awful", -2.0),
    ("awkward", -0.6),
    ("bad", -2.5),
    ("bland", -1.3),
    ("boring", -1.3),
    ("broke", -1.8),
    ("broken", -2.1),
    ("buggy", -1.9),
    ("careless", -1.5),
    ("cheap", -0.5),
    ("clumsy", -1.5),
    ("cold", -0.3),
    ("complain", -1.5),
    ("complaint", -1.2),
    ("confusing", -1.3),
    ("crap", -1.6),
    ("crappy", -2.5),
    ("crash", -1.7),
    ("crashes", -1.7),
    ("crowded", -1.2),
    ("cruel", -2.8),
    ("cry", -2.1),
    ("damaged", -2.2),
    ("dead", -3.3),
    ("defective", -1.9),
    ("delay", -1.3),
    ("delayed", -1.4),
    ("depressing", -1.6),
    ("dirty", -1.9),
    ("disappoint", -1.7),
    ("disappointed", -1.9),
    ("disappointing", -2.2),
    ("disappointment", -2.3),
    ("disappoints", -1.6),
    ("disaster", -3.1),
    ("disgusting", -2.4),
    ("dislike", -1.6),
    ("dreadful", -2.7),
    ("dull", -1.7),
    ("expensive", -0.9),
    ("fail", -2.5),
    ("failed", -2.3),
    ("fails", -2.0),
    ("failure", -2.3),
    ("fake", -2.1),
    ("faulty", -1.8),
    ("filthy", -2.4),
    ("flimsy", -1.6),
    ("frustrated", -2.4),
    ("frustrating", -1.9),
    ("gross", -2.1),
    ("greasy", -1.1),
    ("hard", -0.4),
    ("harsh", -1.9),
    ("hate", -2.7),
    ("hated", -3.2),
    ("hates", -1.9),
    ("horrible", -2.5),
    ("hostile", -2.2),
    ("ignored", -1.3),
    ("inadequate", -1.7),
    ("incompetent", -2.4),
    ("inconvenient", -1.5),
    ("inferior", -1.7),
    ("insulting", -2.2),
    ("lame", -1.8),
    ("lazy", -1.5),
    ("lousy", -2.5),
    ("mediocre", -1.0),
    ("mess", -1.5),
    ("messy", -1.5),
    ("miserable", -2.2),
    ("missing", -1.2),
    ("nasty", -2.6),
    ("negative", -2.7),
    ("noisy", -0.7),
    ("outdated", -1.2),
    ("overcooked", -1.4),
    ("overpriced", -1.9),
    ("pain", -2.3),
    ("painful", -1.9),
    ("pathetic", -2.7),
    ("poor", -2.1),
    ("poorly", -1.7),
    ("problem", -1.7),
    ("problems", -1.7),
    ("regret", -1.8),
    ("ridiculous", -1.5),
    ("rude", -2.0),
    ("sad", -2.1),
    ("scary", -2.2),
    ("shabby", -1.5),
    ("slow", -0.8),
    ("smelly", -1.6),
    ("soggy", -1.4),
    ("sorry", -0.3),
    ("stale", -1.4),
    ("stupid", -2.4),
    ("sucks", -1.5),
    ("terrible", -2.1),
    ("tasteless", -1.7),
    ("tough", -0.5),
    ("ugly", -2.3),
    ("unacceptable", -2.0),
    ("uncomfortable", -1.6),
    ("unfriendly", -1.5),
    ("unhappy", -1.8),
    ("unhelpful", -1.7),
    ("unpleasant", -2.1),
    ("unprofessional", -2.0),
    ("unreliable", -1.6),
    ("unusable", -2.0),
    ("upset", -1.6),
    ("useless", -1.8),
    ("waste", -1.8),
    ("wasted", -2.2),
    ("weak", -1.9),
    ("weird", -0.7),
    ("worse", -2.1),
    ("worst", -3.1),
    ("worthless", -1.9),
    ("wrong", -2.1),
];

/// Degree adverbs that scale the valence of the word they precede.
pub(crate) const BOOSTER_INCREMENTS: &[&str] = &[
    "absolutely",
    "amazingly",
    "awfully",
    "completely",
    "considerably",
    "decidedly",
    "deeply",
    "enormously",
    "entirely",
    "especially",
    "exceptionally",
    "extremely",
    "fabulously",
    "fully",
    "greatly",
    "hella",
    "highly",
    "hugely",
    "incredibly",
    "intensely",
    "majorly",
    "more",
    "most",
    "particularly",
    "purely",
    "quite",
    "really",
    "remarkably",
    "so",
    "substantially",
    "super",
    "thoroughly",
    "totally",
    "tremendously",
    "uber",
    "unbelievably",
    "unusually",
    "utterly",
    "very",
];

pub(crate) const BOOSTER_DECREMENTS: &[&str] = &[
    "almost",
    "barely",
    "hardly",
    "kinda",
    "less",
    "little",
    "marginally",
    "occasionally",
    "partly",
    "rather",
    "scarcely",
    "slightly",
    "somewhat",
    "sorta",
];
