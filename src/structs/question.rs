use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub id: u32,
    pub question: &'static str,
    pub category: &'static str,
}

// 固定的面试题目，顺序即展示顺序
pub const QUESTIONS: [Question; 5] = [
    Question {
        id: 1,
        question: "Tell me about yourself and your background.",
        category: "Introduction",
    },
    Question {
        id: 2,
        question: "What interests you most about this position?",
        category: "Motivation",
    },
    Question {
        id: 3,
        question: "Describe a challenging project you've worked on and how you overcame obstacles.",
        category: "Problem Solving",
    },
    Question {
        id: 4,
        question: "Where do you see yourself in 5 years?",
        category: "Career Goals",
    },
    Question {
        id: 5,
        question: "Why should we hire you over other candidates?",
        category: "Value Proposition",
    },
];
