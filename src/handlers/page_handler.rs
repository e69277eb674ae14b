use actix_web::{get, HttpResponse};

// Single-page form. Everything interesting happens behind /api; this page
// is plain glue over those endpoints.
const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>AI Study Buddy</title>
<style>
  body { font-family: sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }
  label { display: block; margin-top: 0.75rem; }
  input, select { width: 100%; padding: 0.35rem; }
  button { margin-top: 1rem; padding: 0.5rem 1.25rem; }
  .error { color: #b00020; }
  .question { margin-top: 1rem; border-top: 1px solid #ddd; padding-top: 0.5rem; }
  .correct { font-weight: bold; }
</style>
</head>
<body>
<h1>AI Study Buddy</h1>
<p>Multi-model (Groq/OpenAI), persona-aware study question generator.</p>

<label>Provider <select id="provider"></select></label>
<label>Model <select id="model"></select></label>
<label>API key <input id="api_key" type="password" placeholder="kept in this session only"></label>
<label>Persona <select id="persona">
  <option>Friendly mentor</option>
  <option>Concise explainer</option>
  <option>Tough coach</option>
  <option>Enthusiastic tutor</option>
</select></label>
<label>Topic <input id="topic" placeholder="e.g., Photosynthesis, Calculus integrals"></label>
<label>Question type <select id="question_type">
  <option value="multiple_choice">Multiple choice</option>
  <option value="fill_blank">Fill in the blanks</option>
</select></label>
<label>Difficulty <select id="difficulty">
  <option>easy</option><option selected>medium</option><option>hard</option>
</select></label>
<label>Number of questions <input id="num_questions" type="number" min="1" max="5" value="3"></label>

<button id="generate">Generate questions</button>
<a id="download" href="/api/question-sets/latest/export" hidden>Download as .txt</a>
<p id="status"></p>
<div id="result"></div>

<script>
let catalog = {};

async function loadProviders() {
  const response = await fetch('/api/providers');
  const data = await response.json();
  const providerSelect = document.getElementById('provider');
  for (const provider of data.providers) {
    catalog[provider.name] = provider.models;
    providerSelect.add(new Option(provider.name));
  }
  providerSelect.onchange = refreshModels;
  refreshModels();
}

function refreshModels() {
  const provider = document.getElementById('provider').value;
  const modelSelect = document.getElementById('model');
  modelSelect.innerHTML = '';
  for (const model of catalog[provider] || []) {
    modelSelect.add(new Option(model));
  }
}

function render(set) {
  const result = document.getElementById('result');
  result.innerHTML = '';
  set.questions.forEach((q, i) => {
    const block = document.createElement('div');
    block.className = 'question';
    let html = '<strong>Q' + (i + 1) + '. ' + q.question + '</strong>';
    if (q.options) {
      for (const opt of q.options) {
        const correct = opt.trim().toLowerCase() === q.answer.trim().toLowerCase();
        html += '<div class="' + (correct ? 'correct' : '') + '">' +
          (correct ? '✅ ' : '• ') + opt + '</div>';
      }
    }
    html += '<div>Answer: ' + q.answer + '</div>';
    if (q.explanation) { html += '<em>' + q.explanation + '</em>'; }
    block.innerHTML = html;
    result.appendChild(block);
  });
  document.getElementById('download').hidden = false;
}

document.getElementById('generate').onclick = async () => {
  const status = document.getElementById('status');
  status.className = '';
  status.textContent = 'Calling the agent...';
  const body = {
    provider: document.getElementById('provider').value,
    model: document.getElementById('model').value,
    api_key: document.getElementById('api_key').value || null,
    persona: document.getElementById('persona').value,
    topic: document.getElementById('topic').value,
    question_type: document.getElementById('question_type').value,
    difficulty: document.getElementById('difficulty').value,
    num_questions: Number(document.getElementById('num_questions').value)
  };
  const response = await fetch('/api/question-sets', {
    method: 'POST',
    headers: { 'Content-Type': 'application/json' },
    body: JSON.stringify(body)
  });
  if (response.ok) {
    status.textContent = 'Generated questions!';
    render(await response.json());
  } else {
    const failure = await response.json().catch(() => ({ error: response.statusText }));
    status.className = 'error';
    status.textContent = failure.error;
  }
};

loadProviders();
</script>
</body>
</html>
"#;

#[get("/")]
async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_HTML)
}
