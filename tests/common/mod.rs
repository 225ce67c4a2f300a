#![allow(dead_code)]

use cipherforge::config::Config;
use cipherforge::language::LanguageProfile;
use std::sync::Arc;

/// Plain English prose, long enough for stable letter statistics.
pub const ENGLISH_SAMPLE: &str = "It was late in the evening when the old man finally came down \
the hill to the village. He had walked for most of the day, and the road had been hard on \
his feet, but he did not complain. There was a small inn at the edge of the market square, \
and he knew that the woman who kept it would give him a bed and a warm meal if he asked. \
When he opened the door the room was full of people who had come in from the fields, and \
they were talking about the harvest and the weather and the price of grain in the town \
across the river. Nobody paid much attention to him at first. He sat down near the fire \
and waited, and after a while the woman brought him bread and cheese and a cup of wine. \
She asked him where he had come from, and he told her that he had been travelling for \
many years, from one country to another, and that he was looking for his brother, who \
had left home when they were both young. She said that she did not know anyone by that \
name, but that there was a man in the mountains who knew everything that happened in \
this part of the world, and that he should go and see him in the morning. The old man \
thanked her and went up to his room. It was a plain room with a narrow bed and a window \
that looked out over the valley. He stood by the window for a long time, watching the \
lights of the farms go out one by one, and thinking of all the places he had seen and \
all the people he had met on the way. Then he lay down and slept until the sun came up \
over the mountains and the birds began to sing in the trees outside the house.";

/// A short Turkish passage, ASCII-folded.
pub const TURKISH_SAMPLE: &str = "Bir zamanlar uzak bir ulkede yasayan yasli bir adam vardi. \
Her sabah erkenden kalkar, bahcesindeki agaclari sular ve sonra kasabaya inerdi. Kasabanin \
insanlari onu cok severdi, cunku her zaman yardima hazirdi ve kimseye kotu bir soz \
soylemezdi. Bir gun kasabaya yabanci bir genc geldi ve yasli adamin evini sordu. Insanlar \
ona yolu gosterdiler ve genc adam aksam olmadan once evin kapisina vardi.";

pub const PANGRAM: &str = "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG";

pub fn english() -> Arc<LanguageProfile> {
    Arc::new(LanguageProfile::english())
}

pub fn seeded_config(seed: u64) -> Config {
    let mut config = Config::default();
    config.search.seed = Some(seed);
    config
}

/// Uniformly random upper-case letters from a fixed seed.
pub fn random_letters(len: usize, seed: u64) -> String {
    let mut rng = fastrand::Rng::with_seed(seed);
    (0..len).map(|_| (b'A' + rng.u8(0..26)) as char).collect()
}
