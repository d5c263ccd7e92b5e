//! Word lists and verb inflection for the rule-based tagger.
//!
//! Closed-class words are listed exhaustively. Open classes only list what
//! matters for review text: evaluative adjectives (so copular complements
//! are recognized) and the verbs reviewers use. Verb forms are generated
//! from a base form and an inflection pattern.

use std::collections::HashMap;

pub(crate) const DETERMINERS: &[&str] = &[
    "a", "an", "the", "every", "each", "no", "another", "some", "any", "all", "both", "either",
    "neither", "such", "whatever", "which", "what",
];

pub(crate) const DEMONSTRATIVES: &[&str] = &["this", "that", "these", "those"];

pub(crate) const POSSESSIVES: &[&str] = &["my", "your", "his", "her", "its", "our", "their"];

pub(crate) const PRONOUNS: &[&str] = &[
    "i", "me", "you", "he", "him", "she", "it", "we", "us", "they", "them", "myself",
    "yourself", "himself", "herself", "itself", "ourselves", "themselves", "mine", "yours",
    "hers", "ours", "theirs", "something", "nothing", "everything", "anything", "someone",
    "everyone", "anyone", "nobody", "somebody", "everybody", "who", "whom",
];

/// Forms of "be" plus modals; "do" and "have" are decided by context.
pub(crate) const AUXILIARIES: &[&str] = &[
    "is", "am", "are", "was", "were", "be", "been", "being", "'re", "'m", "\u{2019}re",
    "\u{2019}m", "will", "would", "can", "could", "ca", "wo", "shall", "should", "may", "might",
    "must", "'ll", "'d", "'ve", "\u{2019}ll", "\u{2019}d", "\u{2019}ve",
];

pub(crate) const BE_FORMS: &[&str] = &[
    "is", "am", "are", "was", "were", "be", "been", "being", "'s", "'re", "'m", "\u{2019}s",
    "\u{2019}re", "\u{2019}m",
];

pub(crate) const DO_HAVE: &[&str] = &["do", "does", "did", "have", "has", "had"];

pub(crate) const NEGATIONS: &[&str] = &["not", "n't", "n\u{2019}t", "never"];

pub(crate) const POSSESSIVE_CLITICS: &[&str] = &["'s", "\u{2019}s"];

pub(crate) const PREPOSITIONS: &[&str] = &[
    "about", "above", "across", "after", "against", "along", "among", "around", "at", "before",
    "behind", "below", "beneath", "beside", "besides", "between", "beyond", "by", "despite",
    "down", "during", "except", "for", "from", "in", "inside", "into", "near", "of", "off",
    "on", "onto", "out", "outside", "over", "per", "since", "than", "through", "throughout",
    "toward", "towards", "under", "underneath", "until", "up", "upon", "via", "with", "within",
    "without",
];

pub(crate) const COORDINATORS: &[&str] = &["and", "but", "or", "nor", "yet", "plus"];

pub(crate) const SUBORDINATORS: &[&str] = &[
    "although", "though", "because", "since", "while", "whereas", "if", "unless", "when",
    "whenever", "once", "until", "as", "after", "before",
];

pub(crate) const ADVERBS: &[&str] = &[
    "very", "so", "too", "quite", "rather", "somewhat", "really", "pretty", "fairly", "just",
    "also", "still", "even", "only", "almost", "always", "often", "sometimes", "usually",
    "again", "already", "here", "there", "now", "then", "soon", "well", "much", "more", "most",
    "less", "least", "enough", "super", "kinda", "sorta", "hella", "overall", "however",
    "definitely", "never", "ever", "yet", "maybe", "perhaps", "otherwise", "instead",
    "anyway", "somehow", "together", "away", "back", "ago", "twice", "once", "uber",
];

pub(crate) const INTERJECTIONS: &[&str] = &[
    "wow", "oh", "ah", "hey", "yes", "yeah", "no", "nope", "ugh", "meh", "yay", "oops",
    "please", "thanks", "lol", "omg", "hmm", "alas",
];

pub(crate) const NUMBERS: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "twenty", "thirty", "forty", "fifty", "hundred", "thousand",
];

/// Adjectives recognized without a suffix cue.
pub(crate) const ADJECTIVES: &[&str] = &[
    // evaluative
    "good", "great", "bad", "nice", "fine", "okay", "ok", "awesome", "excellent", "amazing",
    "terrible", "horrible", "awful", "poor", "best", "better", "worse", "worst", "perfect",
    "superb", "fantastic", "wonderful", "lovely", "delicious", "tasty", "bland", "stale",
    "fresh", "friendly", "rude", "slow", "fast", "quick", "cheap", "expensive", "overpriced",
    "clean", "dirty", "comfortable", "uncomfortable", "beautiful", "ugly", "cute", "cool",
    "warm", "cold", "hot", "loud", "quiet", "noisy", "happy", "unhappy", "sad", "angry",
    "mediocre", "decent", "solid", "weak", "strong", "reliable", "unreliable", "helpful",
    "unhelpful", "useless", "useful", "easy", "hard", "difficult", "simple", "smooth",
    "rough", "sweet", "sour", "salty", "bitter", "spicy", "greasy", "soggy", "crisp", "crispy",
    "tender", "tough", "dry", "juicy", "rich", "light", "heavy", "small", "large", "big",
    "huge", "tiny", "long", "short", "high", "low", "new", "old", "young", "fair", "unfair",
    "right", "wrong", "true", "false", "real", "fake", "broken", "damaged", "defective",
    "faulty", "flimsy", "sturdy", "durable", "gorgeous", "stunning", "elegant", "stylish",
    "fancy", "plain", "dull", "boring", "exciting", "interesting", "amusing", "funny", "fun",
    "lame", "stupid", "smart", "clever", "kind", "polite", "attentive", "professional",
    "unprofessional", "incompetent", "lazy", "arrogant", "hostile", "calm", "gentle",
    "pleasant", "unpleasant", "disgusting", "gross", "nasty", "filthy", "messy", "tidy",
    "cozy", "comfy", "spacious", "crowded", "empty", "full", "busy", "late", "early",
    "incredible", "outstanding", "exceptional", "brilliant", "magnificent", "marvelous",
    "phenomenal", "spectacular", "terrific", "fabulous", "flawless", "impressive",
    "disappointing", "disappointed", "annoying", "annoyed", "frustrating", "frustrated",
    "satisfied", "satisfying", "pleased", "impressed", "amazed", "delighted", "excited",
    "confusing", "depressing", "refreshing", "welcoming", "charming", "appealing",
    "outdated", "missing", "wasted", "upset", "sorry", "glad", "miserable", "pathetic",
    "ridiculous", "inadequate", "inferior", "abysmal", "appalling", "dreadful", "lousy",
    "crappy", "buggy", "shabby", "smelly", "scary", "weird", "strange", "odd", "awkward",
    "clumsy", "harsh", "honest", "generous", "healthy", "safe", "dead", "alive", "free",
    "same", "different", "other", "several", "many", "few", "next", "first", "whole",
    "entire", "neat", "bright", "dark", "clear", "accurate", "effective", "efficient",
    "convenient", "inconvenient", "affordable", "inexpensive", "popular", "favorite",
    "special", "authentic", "positive", "negative", "powerful", "responsive", "intuitive",
    "valuable", "worthless", "worth", "worthy", "unacceptable", "acceptable", "unusable",
    "tasteless", "careless", "cheerful", "flavorful", "delightful", "adorable",
    "attractive", "accessible", "dependable", "enjoyable", "supportive", "cruel",
    "anxious", "ashamed", "insulting", "unfriendly", "overcooked", "undercooked", "raw",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum VerbPattern {
    /// walk -> walks, walked, walking
    Regular,
    /// love -> loves, loved, loving
    RegularE,
    /// stop -> stops, stopped, stopping
    DoubleConsonant,
    /// try -> tries, tried, trying
    YToI,
    /// -es third person: fix -> fixes, fixed, fixing
    Sibilant,
    Irregular {
        past: &'static str,
        participle: &'static str,
    },
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct VerbEntry {
    pub base: &'static str,
    pub pattern: VerbPattern,
}

const fn regular(base: &'static str) -> VerbEntry {
    VerbEntry {
        base,
        pattern: VerbPattern::Regular,
    }
}

const fn regular_e(base: &'static str) -> VerbEntry {
    VerbEntry {
        base,
        pattern: VerbPattern::RegularE,
    }
}

const fn doubling(base: &'static str) -> VerbEntry {
    VerbEntry {
        base,
        pattern: VerbPattern::DoubleConsonant,
    }
}

const fn y_to_i(base: &'static str) -> VerbEntry {
    VerbEntry {
        base,
        pattern: VerbPattern::YToI,
    }
}

const fn sibilant(base: &'static str) -> VerbEntry {
    VerbEntry {
        base,
        pattern: VerbPattern::Sibilant,
    }
}

const fn irregular(base: &'static str, past: &'static str, participle: &'static str) -> VerbEntry {
    VerbEntry {
        base,
        pattern: VerbPattern::Irregular { past, participle },
    }
}

pub(crate) const VERBS: &[VerbEntry] = &[
    regular("work"),
    regular("enjoy"),
    regular("disappoint"),
    regular("fail"),
    sibilant("crash"),
    regular("look"),
    regular("smell"),
    regular("sound"),
    regular("seem"),
    regular("want"),
    regular("need"),
    regular("order"),
    regular("deliver"),
    regular("help"),
    regular("suck"),
    regular("rock"),
    regular("last"),
    regular("leak"),
    regular("cook"),
    regular("overcook"),
    regular("undercook"),
    regular("burn"),
    regular("wait"),
    regular("stay"),
    regular("remain"),
    regular("appear"),
    regular("turn"),
    regular("exceed"),
    regular("annoy"),
    regular("perform"),
    regular("load"),
    regular("drain"),
    regular("overheat"),
    regular("visit"),
    regular("return"),
    regular("call"),
    regular("answer"),
    regular("expect"),
    regular("complain"),
    regular("recommend"),
    regular("suggest"),
    regular("start"),
    regular("open"),
    regular("listen"),
    regular("play"),
    regular("offer"),
    regular("lack"),
    regular("treat"),
    regular("thank"),
    regular("check"),
    regular("happen"),
    regular("end"),
    regular("act"),
    regular("add"),
    regular("ask"),
    sibilant("impress"),
    sibilant("watch"),
    regular_e("love"),
    regular_e("like"),
    regular_e("hate"),
    regular_e("dislike"),
    regular_e("taste"),
    regular_e("arrive"),
    regular_e("serve"),
    regular_e("use"),
    regular_e("ignore"),
    regular_e("please"),
    regular_e("frustrate"),
    regular_e("bore"),
    regular_e("amaze"),
    regular_e("surprise"),
    regular_e("improve"),
    regular_e("upgrade"),
    regular_e("replace"),
    regular_e("update"),
    regular_e("deserve"),
    regular_e("hope"),
    regular_e("save"),
    regular_e("care"),
    regular_e("receive"),
    regular_e("smile"),
    regular_e("move"),
    regular_e("close"),
    regular_e("charge"),
    regular_e("crave"),
    regular_e("rave"),
    doubling("stop"),
    doubling("lag"),
    doubling("regret"),
    doubling("prefer"),
    doubling("plan"),
    y_to_i("try"),
    y_to_i("satisfy"),
    y_to_i("worry"),
    sibilant("fix"),
    sibilant("wish"),
    sibilant("miss"),
    sibilant("finish"),
    irregular("break", "broke", "broken"),
    irregular("feel", "felt", "felt"),
    irregular("come", "came", "come"),
    irregular("go", "went", "gone"),
    irregular("get", "got", "gotten"),
    irregular("make", "made", "made"),
    irregular("take", "took", "taken"),
    irregular("give", "gave", "given"),
    irregular("buy", "bought", "bought"),
    irregular("cost", "cost", "cost"),
    irregular("eat", "ate", "eaten"),
    irregular("drink", "drank", "drunk"),
    irregular("keep", "kept", "kept"),
    irregular("run", "ran", "run"),
    irregular("freeze", "froze", "frozen"),
    irregular("forget", "forgot", "forgotten"),
    irregular("find", "found", "found"),
    irregular("think", "thought", "thought"),
    irregular("say", "said", "said"),
    irregular("tell", "told", "told"),
    irregular("become", "became", "become"),
    irregular("hurt", "hurt", "hurt"),
    irregular("sell", "sold", "sold"),
    irregular("bring", "brought", "brought"),
    irregular("leave", "left", "left"),
    irregular("pay", "paid", "paid"),
    irregular("spend", "spent", "spent"),
    irregular("know", "knew", "known"),
    irregular("see", "saw", "seen"),
    irregular("hear", "heard", "heard"),
    irregular("show", "showed", "shown"),
    irregular("write", "wrote", "written"),
    irregular("sit", "sat", "sat"),
    irregular("put", "put", "put"),
    irregular("send", "sent", "sent"),
    irregular("lose", "lost", "lost"),
    irregular("win", "won", "won"),
    irregular("blow", "blew", "blown"),
    irregular("fall", "fell", "fallen"),
];

/// What a surface form tells us about a verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct VerbForm {
    /// Can be read as a past participle (regular `-ed` forms always can).
    pub participle: bool,
    pub gerund: bool,
}

/// Every surface form of a verb with its reading.
pub(crate) fn inflect(base: &str, pattern: VerbPattern) -> Vec<(String, VerbForm)> {
    let (third, past, participle, gerund) = match pattern {
        VerbPattern::Regular => {
            let past = format!("{base}ed");
            (format!("{base}s"), past.clone(), past, format!("{base}ing"))
        }
        VerbPattern::RegularE => {
            let stem = base.strip_suffix('e').unwrap_or(base);
            let past = format!("{base}d");
            (format!("{base}s"), past.clone(), past, format!("{stem}ing"))
        }
        VerbPattern::DoubleConsonant => {
            let last = base.chars().last().map(String::from).unwrap_or_default();
            let past = format!("{base}{last}ed");
            (format!("{base}s"), past.clone(), past, format!("{base}{last}ing"))
        }
        VerbPattern::YToI => {
            let stem = base.strip_suffix('y').unwrap_or(base);
            let past = format!("{stem}ied");
            (format!("{stem}ies"), past.clone(), past, format!("{base}ing"))
        }
        VerbPattern::Sibilant => {
            let past = format!("{base}ed");
            (format!("{base}es"), past.clone(), past, format!("{base}ing"))
        }
        VerbPattern::Irregular { past, participle } => {
            let gerund = if IRREGULAR_DOUBLING.contains(&base) {
                let last = base.chars().last().map(String::from).unwrap_or_default();
                format!("{base}{last}ing")
            } else if base.ends_with('e') && !base.ends_with("ee") {
                format!("{}ing", &base[..base.len() - 1])
            } else {
                format!("{base}ing")
            };
            let third = if base.ends_with('o') {
                format!("{base}es")
            } else {
                format!("{base}s")
            };
            (third, past.to_string(), participle.to_string(), gerund)
        }
    };

    let plain = VerbForm::default();
    let mut forms = vec![
        (base.to_string(), plain),
        (third, plain),
        (
            gerund,
            VerbForm {
                participle: false,
                gerund: true,
            },
        ),
    ];
    let as_participle = VerbForm {
        participle: true,
        gerund: false,
    };
    if past == participle {
        forms.push((past, as_participle));
    } else {
        forms.push((past, plain));
        forms.push((participle, as_participle));
    }
    forms
}

const IRREGULAR_DOUBLING: &[&str] = &["run", "sit", "put", "forget", "win", "get"];

/// Lookup table from surface form to verb reading.
#[derive(Debug, Clone, Default)]
pub(crate) struct VerbMorphology {
    forms: HashMap<String, VerbForm>,
}

impl VerbMorphology {
    pub(crate) fn new() -> Self {
        let mut morphology = Self::default();
        for entry in VERBS {
            morphology.insert(entry.base, entry.pattern);
        }
        morphology
    }

    fn insert(&mut self, base: &str, pattern: VerbPattern) {
        for (surface, form) in inflect(base, pattern) {
            // "come" and "run" are both base and participle; keep the participle reading.
            self.forms
                .entry(surface)
                .and_modify(|existing| existing.participle |= form.participle)
                .or_insert(form);
        }
    }

    /// Registers a caller-supplied verb, guessing its regular pattern from the spelling.
    pub(crate) fn add_regular(&mut self, base: &str) {
        let base = base.to_lowercase();
        let pattern = if base.ends_with('e') {
            VerbPattern::RegularE
        } else if base.ends_with('y') && !base.ends_with("ay") && !base.ends_with("ey") {
            VerbPattern::YToI
        } else if ["s", "x", "sh", "ch"].iter().any(|end| base.ends_with(end)) {
            VerbPattern::Sibilant
        } else {
            VerbPattern::Regular
        };
        self.insert(&base, pattern);
    }

    pub(crate) fn lookup(&self, word: &str) -> Option<VerbForm> {
        self.forms.get(word).copied()
    }
}
