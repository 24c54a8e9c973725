// Shared prompt fragments used by more than one prompting module.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// Sentence every cover letter must contain word for word.
pub const JUNIOR_ROLE_PHRASE: &str = "I would love to have a junior role at your company, \
but if it's too much to ask, I'm also ready to prove myself with an internship of a duration \
of your choice";

/// Instruction that keeps residual scraping noise out of generated text.
pub const COMPANY_NOISE_INSTRUCTION: &str = "\
    If the company name or description above contains words like '403', 'Forbidden', \
    'Error' or 'Access Denied', ignore them completely: they come from a failed page \
    load, not from the company. Write about the company in general terms instead.";

/// Instruction against invented company facts.
pub const NO_INVENTION_INSTRUCTION: &str = "\
    Do NOT invent facts about the company (products, clients, numbers, awards) that \
    are not stated in the information provided.";
