//! Fixed prompt templates, one per endpoint. Caller text is embedded
//! verbatim; the route layer rejects empty fields before these run.

pub const ASK_SYSTEM_PROMPT: &str =
    "You are a helpful AI assistant for students. When answering a question, \
     always include 2-3 relevant resource links at the end of your response, \
     formatted as a markdown list under the heading 'Resources:'. Also, format \
     your response using markdown for headings, bold text, and code blocks for \
     a clean look.";

pub fn flashcards(text: &str) -> String {
    format!(
        "From the following text, generate a list of 5-10 flashcards. Each \
         flashcard should have a 'question' and an 'answer'. Return the output \
         as a JSON object, like this: {{ 'flashcards': [{{'question': '...', \
         'answer': '...'}}] }}. Text: {text}"
    )
}

pub fn quiz(text: &str) -> String {
    format!(
        "From the following text, generate a 5 question multiple-choice quiz. \
         Each question should have a 'question', an array of 'options' and a \
         single correct 'answer'. Return the output as a JSON object, like \
         this: {{'quiz': [{{'id': 1, 'question': '...', 'options': ['...', \
         '...', '...'], 'answer': '...'}}]}}. Text: {text}"
    )
}

pub fn summarize(text: &str) -> String {
    format!(
        "Summarize the following text concisely and in bullet points. Return \
         the output in markdown format. Text: {text}"
    )
}

pub fn plan(semester_start: &str, exam_dates: &str) -> String {
    format!(
        "Create a detailed study plan from the semester start date: \
         {semester_start} to the given exam dates. The exam dates are in the \
         format 'Subject - Date'. Please format your response using markdown \
         for headings and lists. The exam dates are: {exam_dates}"
    )
}

pub fn explain_code(code: &str) -> String {
    format!(
        "Explain the following code snippet for a student. Break down what \
         each part does, identify the programming language, and describe its \
         overall purpose. Return the explanation in markdown format. Code: \
         \n\n{code}"
    )
}
