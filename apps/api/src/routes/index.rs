use axum::response::Html;

use crate::review::handlers::{JOB_DESCRIPTION_FIELD, RESUME_FIELD};
use crate::review::variant::PromptVariant;

const PAGE_TEMPLATE: &str = r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>ATS Resume Expert</title>
</head>
<body>
<h1>ATS Resume Expert</h1>
<form id="review-form">
  <p>Upload your resume &amp; paste the job description below</p>
  <label>Job Description<br><textarea name="{jd_field}" rows="12" cols="80"></textarea></label>
  <p><label>Upload your Resume (PDF only) <input type="file" name="{resume_field}" accept=".pdf,application/pdf"></label></p>
  <p>{buttons}</p>
</form>
<section id="output" hidden>
  <h2 id="heading"></h2>
  <pre id="result"></pre>
</section>
<script>
const form = document.getElementById("review-form");
form.addEventListener("submit", async (event) => {
  event.preventDefault();
  const variant = event.submitter.value;
  const output = document.getElementById("output");
  const heading = document.getElementById("heading");
  const result = document.getElementById("result");
  heading.textContent = "Working...";
  result.textContent = "";
  output.hidden = false;
  const response = await fetch("/api/v1/review/" + variant, { method: "POST", body: new FormData(form) });
  const body = await response.json();
  if (response.ok) {
    heading.textContent = body.heading;
    result.textContent = body.result;
  } else {
    heading.textContent = "Error";
    result.textContent = body.error.message;
  }
});
</script>
</body>
</html>
"#;

/// GET /
/// Unstyled upload page. Each button triggers one review action.
pub async fn index_handler() -> Html<String> {
    Html(render_page())
}

fn render_page() -> String {
    let buttons: Vec<String> = PromptVariant::ALL
        .into_iter()
        .map(|v| format!(r#"<button type="submit" value="{}">{}</button>"#, v.slug(), v.label()))
        .collect();

    PAGE_TEMPLATE
        .replace("{jd_field}", JOB_DESCRIPTION_FIELD)
        .replace("{resume_field}", RESUME_FIELD)
        .replace("{buttons}", &buttons.join("\n  "))
}
