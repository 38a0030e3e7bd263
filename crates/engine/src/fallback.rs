//! Static question bank used when generated content is unavailable

use crate::quiz::{Difficulty, QuizQuestion};

struct Entry {
    id: &'static str,
    topic: &'static str,
    prompt: &'static str,
    options: &'static [&'static str],
    correct_index: usize,
    explanation: &'static str,
    difficulty: Difficulty,
}

static BANK: &[Entry] = &[
    Entry {
        id: "budget-1",
        topic: "budgeting",
        prompt: "In the 50/30/20 rule, what is the 20% for?",
        options: &["Needs", "Wants", "Savings and debt repayment", "Taxes"],
        correct_index: 2,
        explanation: "20% of take-home pay goes to savings and paying down debt.",
        difficulty: Difficulty::Easy,
    },
    Entry {
        id: "budget-2",
        topic: "budgeting",
        prompt: "Which of these is a fixed expense?",
        options: &["Groceries", "Rent", "Eating out", "Concert tickets"],
        correct_index: 1,
        explanation: "Rent is the same amount every month.",
        difficulty: Difficulty::Easy,
    },
    Entry {
        id: "budget-3",
        topic: "budgeting",
        prompt: "A subscription costs 9.99 a month. Roughly what does it cost per year?",
        options: &["60", "90", "120", "150"],
        correct_index: 2,
        explanation: "9.99 x 12 is about 120.",
        difficulty: Difficulty::Medium,
    },
    Entry {
        id: "saving-1",
        topic: "saving",
        prompt: "What is an emergency fund?",
        options: &[
            "Money set aside for unexpected costs",
            "A loan from the bank",
            "A type of stock",
            "A credit card limit",
        ],
        correct_index: 0,
        explanation: "It covers surprises like repairs or medical bills.",
        difficulty: Difficulty::Easy,
    },
    Entry {
        id: "saving-2",
        topic: "saving",
        prompt: "You save 100 at 5% interest compounded yearly. How much after 2 years?",
        options: &["105.00", "110.00", "110.25", "115.50"],
        correct_index: 2,
        explanation: "100 x 1.05 x 1.05 = 110.25.",
        difficulty: Difficulty::Medium,
    },
    Entry {
        id: "saving-3",
        topic: "saving",
        prompt: "With the rule of 72, how long does money take to double at 6% a year?",
        options: &["6 years", "12 years", "18 years", "72 years"],
        correct_index: 1,
        explanation: "72 / 6 = 12 years.",
        difficulty: Difficulty::Hard,
    },
    Entry {
        id: "invest-1",
        topic: "investing",
        prompt: "What does owning a share of stock mean?",
        options: &[
            "You lent money to a company",
            "You own a small part of a company",
            "You work for the company",
            "You insured the company",
        ],
        correct_index: 1,
        explanation: "A share is a slice of ownership.",
        difficulty: Difficulty::Easy,
    },
    Entry {
        id: "invest-2",
        topic: "investing",
        prompt: "Why do investors diversify?",
        options: &[
            "To guarantee profits",
            "To avoid paying fees",
            "To spread risk across many assets",
            "To trade more often",
        ],
        correct_index: 2,
        explanation: "Spreading money out limits the damage any one asset can do.",
        difficulty: Difficulty::Medium,
    },
    Entry {
        id: "invest-3",
        topic: "investing",
        prompt: "An index fund's expense ratio is 0.2%. What does it cost per year on 10,000 invested?",
        options: &["2", "20", "200", "2,000"],
        correct_index: 1,
        explanation: "0.2% of 10,000 is 20.",
        difficulty: Difficulty::Hard,
    },
    Entry {
        id: "credit-1",
        topic: "credit",
        prompt: "What usually happens if you only pay the minimum on a credit card?",
        options: &[
            "Nothing, the rest is forgiven",
            "Interest is charged on the remaining balance",
            "Your limit doubles",
            "The card is cancelled",
        ],
        correct_index: 1,
        explanation: "The unpaid balance keeps accruing interest.",
        difficulty: Difficulty::Easy,
    },
    Entry {
        id: "credit-2",
        topic: "credit",
        prompt: "Which habit helps a credit score the most?",
        options: &[
            "Paying bills on time",
            "Opening many cards at once",
            "Maxing out your limit",
            "Checking your balance daily",
        ],
        correct_index: 0,
        explanation: "Payment history is the biggest factor.",
        difficulty: Difficulty::Medium,
    },
    Entry {
        id: "credit-3",
        topic: "credit",
        prompt: "A 1,000 balance at 24% APR. About how much interest accrues in one month?",
        options: &["2", "10", "20", "240"],
        correct_index: 2,
        explanation: "24% / 12 = 2% per month, 2% of 1,000 = 20.",
        difficulty: Difficulty::Hard,
    },
];

fn to_question(entry: &Entry) -> QuizQuestion {
    QuizQuestion {
        id: entry.id.to_string(),
        topic: entry.topic.to_string(),
        prompt: entry.prompt.to_string(),
        options: entry.options.iter().map(|o| o.to_string()).collect(),
        correct_index: entry.correct_index,
        explanation: Some(entry.explanation.to_string()),
        difficulty: entry.difficulty,
    }
}

/// Every static question
pub fn all_questions() -> Vec<QuizQuestion> {
    BANK.iter().map(to_question).collect()
}

/// Static questions for a topic, or the whole bank if the topic is unknown
pub fn questions_for(topic: Option<&str>) -> Vec<QuizQuestion> {
    let Some(topic) = topic.map(|t| t.trim().to_lowercase()) else {
        return all_questions();
    };

    let matching: Vec<_> = BANK
        .iter()
        .filter(|e| e.topic == topic)
        .map(to_question)
        .collect();

    if matching.is_empty() {
        all_questions()
    } else {
        matching
    }
}

/// Known topics, in bank order
pub fn topics() -> Vec<&'static str> {
    let mut topics: Vec<&'static str> = Vec::new();
    for entry in BANK {
        if !topics.contains(&entry.topic) {
            topics.push(entry.topic);
        }
    }
    topics
}
