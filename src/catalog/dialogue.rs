// ABOUTME: Bundled rule table and fallback replies for the coaching chat
// ABOUTME: Each rule pairs trigger keywords with canned replies in English and Roman Urdu
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCal Labs

use crate::models::{DialogueRule, LocalizedText};

fn rule(keywords: &[&str], en: &str, roman_urdu: &str) -> DialogueRule {
    DialogueRule {
        keywords: keywords.iter().map(|k| (*k).to_owned()).collect(),
        response: LocalizedText::new(en, roman_urdu),
    }
}

/// The bundled dialogue rules, in matching priority order
///
/// Earlier rules win score ties, so greetings and courtesies come first.
pub(super) fn bundled_rules() -> Vec<DialogueRule> {
    vec![
        rule(
            &["hello", "hi", "salam", "hey", "kaise", "how are you"],
            "Hello! 👋 I'm doing great. Tell me, what should we focus on today? Diet or Workout?",
            "Salam! 👋 Main bilkul theek hoon. Batayein, aaj hum kis chez par focus karein? Diet ya Workout?",
        ),
        rule(
            &["thanks", "shukriya", "thank you", "great"],
            "You're welcome! Happy to help. Any other questions? 😊",
            "You're welcome! Khushi hui ke main madad kar saka. Koi aur sawal? 😊",
        ),
        rule(
            &["bye", "allah hafiz", "tata", "goodbye"],
            "Goodbye! Take care and don't miss your workout! 👋",
            "Allah Hafiz! Apna khayal rakhein aur workout miss mat karna! 👋",
        ),
        rule(
            &["weight loss", "wazan kam", "fat loss", "mota", "slim", "patla"],
            "For weight loss, the formula is simple: **Calorie Deficit**. \n1. Eat 300-500 calories less than maintenance. \n2. Reduce sugar and oily foods. \n3. Do cardio or walk for 30 mins daily. 🏃‍♂️",
            "Weight loss ka simple formula hai: **Calorie Deficit**. \n1. Apni maintenance calories se 300-500 kam khayein. \n2. Meetha (sugar) aur oily khana band karein. \n3. Rozana 30 min walk ya cardio karein. 🏃‍♂️",
        ),
        rule(
            &["gain", "wazan barhana", "mota hona", "muscle", "bulk", "kamzor"],
            "**Calorie Surplus** is key for weight gain. \n1. Eat 300-500 calories more than maintenance. \n2. Increase Protein (Chicken, Eggs, Milk). \n3. Do Heavy weight training to build muscle, not fat. 💪",
            "Weight gain ke liye **Calorie Surplus** zaroori hai. \n1. Maintenance se 300-500 zyada calories khayein. \n2. Protein zyada lein (Chicken, Eggs, Milk). \n3. Heavy weight training karein taake muscle banay, fat nahi. 💪",
        ),
        rule(
            &["biryani", "chawal", "rice"],
            "Biryani is love, but it has calories! 🍛 One plate (200g) = 300-400 calories. \nTip: Control your portion and take more Raita/Salad.",
            "Biryani pyar hai lekin calories bhi! 🍛 Ek plate (200g) = 300-400 calories. \nTip: Portion control karein aur Raita/Salad zyada lein.",
        ),
        rule(
            &["roti", "bread", "wheat"],
            "One medium Roti has ~100-120 calories. For weight loss, avoid white flour (maida) and use whole wheat. 🌾",
            "Ek darmiyani Roti mein ~100-120 calories hoti hain. Weight loss ke liye maida avoid karein aur whole wheat (chakki ka atta) use karein. 🌾",
        ),
        rule(
            &["protein", "anda", "egg", "chicken", "gosht"],
            "Protein is essential for muscle repair. \nBest sources: Boiled Eggs (Whites), Chicken Breast, Daal, and Fish. Include protein in every meal! 🥚",
            "Protein muscle repair ke liye zaroori hai. \nBest sources: Ublay huay Anday (Whites), Chicken Breast, Daal, aur Fish. Har meal mein protein hona chahiye! 🥚",
        ),
        rule(
            &["sugar", "meetha", "cheeni", "coke", "pepsi"],
            "Sugar means empty calories. It's the biggest enemy of weight loss. Eat fruits if you crave something sweet! 🍎",
            "Cheeni (Sugar) empty calories hain. Weight loss mein ye sab se bara dushman hai. Fruits khayein agar meetha khane ka dil kare! 🍎",
        ),
        rule(
            &["chai", "tea"],
            "Tea is best without sugar! ☕ One cup of milk tea can have 100+ calories if sugary. You can use Stevia.",
            "Chai baghair cheeni ke best hai! ☕ Ek cup doodh patti mein 100+ calories ho sakti hain agar cheeni zyada ho. Stevia use kar sakte hain.",
        ),
        rule(
            &["abs", "pait", "six pack", "belly"],
            "Abs are made in the kitchen! 🥗 Just doing crunches won't reduce belly fat. You need to lower overall body fat % via diet and cardio.",
            "Abs kitchen mein bante hain! 🥗 Sirf crunches karne se pait kam nahi hoga. Overall body fat % kam karna parega diet aur cardio ke zariye.",
        ),
        rule(
            &["chest", "pushup", "bench"],
            "For Chest: \n1. Pushups (Best for home). \n2. Bench Press. \n3. Chest Flys. \nFocus on form, not weight!",
            "Chest ke liye: \n1. Pushups (Ghar pe best). \n2. Bench Press. \n3. Chest Flys. \nForm par focus karein, weight par nahi!",
        ),
        rule(
            &["legs", "squat", "tang"],
            "Never skip Leg Day! 🦵 Squats and Lunges are best. They boost testosterone and help overall body growth.",
            "Never skip Leg Day! 🦵 Squats aur Lunges best hain. Ye testosterone boost karte hain aur puri body ki growth mein madad karte hain.",
        ),
        rule(
            &["bicep", "dole", "arms"],
            "For Biceps, do Dumbbell Curls and Hammer Curls. But don't forget Triceps (back of arm), they make up 70% of arm size! 💪",
            "Biceps ke liye Dumbbell Curls aur Hammer Curls karein. Lekin Triceps (back of arm) ko mat bhoolna, wo arm ka 70% size banate hain! 💪",
        ),
        rule(
            &["pani", "water", "drink"],
            "Hydration is key! 💧 Drinking 3-4 liters of water daily boosts metabolism and clears skin.",
            "Hydration key hai! 💧 Din mein 3-4 liter paani peene se metabolism tez hota hai aur skin bhi saaf hoti hai.",
        ),
        rule(
            &["neend", "sleep", "sona"],
            "7-8 hours of sleep is necessary for recovery. If you don't sleep, muscles won't grow! 😴",
            "Recovery ke liye 7-8 ghantay ki neend zaroori hai. Agar soenge nahi to muscle grow nahi karega! 😴",
        ),
    ]
}

/// Replies used when no rule scores above zero, per language
pub(super) fn bundled_fallbacks() -> (Vec<String>, Vec<String>) {
    let en = vec![
        "Good question! But currently, I only know about Diet and Fitness. Ask something else? 🤔".to_owned(),
        "I didn't quite get that. Could you ask in simpler words? (e.g., 'Weight loss tips' or 'Biryani calories')".to_owned(),
        "My focus is on fitness. Ask me about food or gym! 💪".to_owned(),
        "That's a bit tricky. Can we talk about diet or exercise?".to_owned(),
    ];
    let roman_urdu = vec![
        "Acha sawal hai! Lekin filhal main sirf Diet aur Fitness ke baray mein janta hoon. Kuch aur poochein? 🤔".to_owned(),
        "Samajh nahi aya, thora aasan alfaz mein poochein? (e.g., 'Weight loss tips' ya 'Biryani calories')".to_owned(),
        "Mera focus fitness par hai. Aap khaney ya gym ke baray mein poochein! 💪".to_owned(),
        "Ye thora mushkil sawal hai. Kya hum diet ya exercise ki baat kar sakte hain?".to_owned(),
    ];
    (en, roman_urdu)
}
