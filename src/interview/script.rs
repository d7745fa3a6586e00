//! Fixed interviewer content: the scripted case text, the quantitative
//! problem, the closing message, and the directive prompts handed to the
//! language model when a question has to be generated.

/// Role directive seeded as the first system message of every session.
pub const SYSTEM_DIRECTIVE: &str = "You are a professional MBB case interviewer.";

/// Spoken introduction, also used (prefixed with `CASE:`) as the second
/// seeded system message.
pub const INTRO_TEXT: &str = "Now let's begin the interview. I've seen that you've had time to read through the Beautify case study. \n\nLet me start by asking you the first question about this case.";

/// Scripted first qualitative question, appended to the introduction on the
/// very first question fetch.
pub const FIRST_QUESTION: &str = "Beautify is excited to support its current staff of beauty consultants on the journey to becoming virtual social media-beauty advisors. Consultants would still lead the way in terms of direct consumer engagement and would be expected to maintain and grow a group of clients. They would sell products through their own pages on beautify.com, make appearances at major retail outlets, and be active on all social media platforms. What possible factors should Beautify consider when shifting this group of employees toward a new set of responsibilities?";

/// Quantitative problem statement, read out once the qualitative portion is
/// exhausted. The client is expected to pause for `wait_time` seconds before
/// recording an answer.
pub const MATH_PROBLEM: &str = "Excellent discussion! Now let's move to the quantitative analysis. The discussion about virtual advisors has been energizing, but I'd like to ground this in some analysis. I've always found it helpful to frame an investment in terms of how long it will take to turn profitable, such as when incremental revenues are greater than the cost of the project.\n\nYou sit down with your teammates from Beautify finance and come up with the following assumptions:\n\n- With advisors, you expect a ten percent overall increase in incremental revenue\u{2014}the team assumes that Beautify will gain new customers who enjoy the experience as well as increased online sales through those engaged, but it will also lose some to other brands that still provide more in-store service. The team assumes this will happen in the first year.\n- In that first year, Beautify will invest \u{20ac}50 million in IT, \u{20ac}25 million in training, \u{20ac}50 million in remodeling department store counters, and \u{20ac}25 million in inventory.\n- Beautify expects a 5% annual depreciation, which is a loss in value of the upfront investment, each year.\n- All-in yearly costs associated with a shift to advisors are expected to be \u{20ac}10 million and will start during the first year.\n- Beautify's revenues are \u{20ac}1.3 billion.\n\nQuestion: How many years would it take until the investment turns profitable?\n\nHelpful hints:\n- Don't feel rushed into performing calculations. Take your time.\n- Remember that calculators are not allowed - you may want to write out your calculations on paper during the interview.\n- Talk your interviewer through your steps so that you can demonstrate an organized approach; the more you talk, the easier it will be for your interviewer to help you.";

/// Scripted quantitative follow-up questions, emitted as one reply after the
/// candidate answers the problem.
pub const MATH_FOLLOWUP_QUESTIONS: [&str; 2] = [
    "If the incremental revenue grows at a different rate, how would that affect the time to profitability?",
    "How sensitive is the profitability to changes in the upfront investment or yearly costs?",
];

/// Closing message, emitted once after the quantitative follow-ups.
pub const CLOSING_MESSAGE: &str = "Thank you for your time and thoughtful answers today. \nWe appreciate your effort in walking us through the case. \nThis concludes the interview. Best of luck in your future endeavors!";

/// Acknowledgment returned for every submission after the closing message.
pub const CONCLUDED_MESSAGE: &str = "Interview has concluded.";

/// Directive appended to the history when (re)generating a qualitative
/// question on a question fetch.
pub const FIRST_QUESTION_DIRECTIVE: &str = "You are a top-tier McKinsey-style case interviewer conducting the Beautify case study.\nAsk follow-up questions based on the candidate's answers to deepen their analysis.\nFocus on challenging their thinking, asking for justification, and exploring different angles.\nKeep your questions concise and professional.";

/// Directive appended to the history when generating a follow-up to a
/// qualitative answer.
pub const FOLLOWUP_DIRECTIVE: &str = "You are a professional McKinsey case interviewer.\nReact naturally to the candidate's answer. Challenge assumptions, ask deeper questions, or ask for justification of numbers.\nAsk exactly ONE follow-up question.\nDo not ask meta-questions or clarification questions.";

/// The two quantitative follow-ups rendered as one reply.
pub fn math_followups_text() -> String {
    MATH_FOLLOWUP_QUESTIONS.join("\n")
}

/// The introduction plus the scripted first question, as spoken on the first
/// fetch.
pub fn intro_with_first_question() -> String {
    format!("{}\n\n{}", INTRO_TEXT, FIRST_QUESTION)
}

/// The case text seeded as the second system message.
pub fn case_seed() -> String {
    format!("CASE:\n{}", INTRO_TEXT)
}
