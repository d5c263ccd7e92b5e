use std::collections::HashMap;

use crate::core::AspectSentiment;

/// Keeps one record per aspect, compared case-insensitively.
///
/// The record with the highest confidence wins; on a tie the earlier record
/// stays. Output follows the order in which each aspect was first seen.
pub fn aggregate(records: Vec<AspectSentiment>) -> Vec<AspectSentiment> {
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut winners: Vec<AspectSentiment> = Vec::new();

    for record in records {
        let key = record.aspect.to_lowercase();
        match slots.get(&key) {
            Some(&slot) => {
                if record.confidence > winners[slot].confidence {
                    winners[slot] = record;
                }
            }
            None => {
                slots.insert(key, winners.len());
                winners.push(record);
            }
        }
    }
    winners
}
