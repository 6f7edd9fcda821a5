//! Dashboard handler — gene input, resource panels, and the evaluation table.

use axum::{
    extract::{Query, State},
    response::Html,
};
use axum_extra::extract::cookie::CookieJar;
use chrono::Local;
use genenet_common::links::{
    genemania_url, giant_url, pathway_commons_url, string_network_url, NETWORKX_DOCS_URL,
};
use genenet_common::GeneSymbol;
use genenet_ranker::{ScoreMatrix, MAX_SCORE, MIN_SCORE, TOTAL_COLUMN};
use serde::Deserialize;
use tracing::warn;

use crate::network::{run_network, NetworkView};
use crate::render::{escape_html, render_network_svg};
use crate::state::SharedState;

/// Page styling shared by every rendered page.
pub const PAGE_STYLE: &str = r#"
body { font-family: Helvetica, Arial, sans-serif; margin: 0; background: #f6f7fb; color: #1f2430; }
.layout { display: flex; min-height: 100vh; }
.sidebar { width: 280px; padding: 24px; background: #ffffff; border-right: 1px solid #e3e6ef; }
.sidebar textarea { width: 100%; height: 140px; font-family: monospace; }
.main-content { flex: 1; padding: 24px 40px; max-width: 1100px; }
.card { background: #ffffff; border: 1px solid #e3e6ef; border-radius: 8px; padding: 16px 20px; margin-bottom: 20px; }
.notice { background: #eaf3ff; border-left: 4px solid #3b82f6; padding: 10px 14px; margin: 12px 0; }
.warning { background: #fff6e5; border-left: 4px solid #f59e0b; padding: 10px 14px; margin: 12px 0; }
.text-muted { color: #6b7280; }
table { border-collapse: collapse; margin: 8px 0; }
th, td { border: 1px solid #e3e6ef; padding: 4px 10px; text-align: left; }
th { background: #f0f2f8; }
.btn { display: inline-block; padding: 6px 14px; border-radius: 6px; border: 1px solid #3b82f6; background: #3b82f6; color: #ffffff; text-decoration: none; cursor: pointer; }
.btn-outline { background: #ffffff; color: #3b82f6; }
details { margin: 6px 0; }
.slider-row { display: flex; align-items: center; gap: 12px; margin: 4px 0; }
.slider-row label { width: 200px; }
"#;

#[derive(Debug, Deserialize, Default)]
pub struct DashboardQuery {
    pub genes: Option<String>,
    /// Present when the "Run Network Analysis" button was pressed.
    pub run: Option<String>,
}

pub async fn dashboard(
    State(state): State<SharedState>,
    jar: CookieJar,
    Query(query): Query<DashboardQuery>,
) -> (CookieJar, Html<String>) {
    let (jar, session) = state.sessions.resolve(jar);
    let scores = state.sessions.scores(session);
    let page = render_page(&state, query.genes.as_deref(), query.run.is_some(), &scores, None).await;
    (jar, Html(page))
}

/// Build the full dashboard, running the network pipeline when `run` is set
/// and the gene list is non-empty.
pub async fn render_page(
    state: &SharedState,
    genes_input: Option<&str>,
    run: bool,
    scores: &ScoreMatrix,
    notice: Option<&str>,
) -> String {
    let genes_input = genes_input.unwrap_or(&state.config.dashboard.default_genes);
    let view = if run {
        let view = run_network(state, genes_input).await;
        (!view.genes.is_empty()).then_some(view)
    } else {
        None
    };

    render_dashboard(&DashboardPage {
        genes_input,
        run,
        view: view.as_ref(),
        scores,
        notice,
        preview_rows: state.config.dashboard.preview_rows,
    })
}

pub struct DashboardPage<'a> {
    pub genes_input: &'a str,
    pub run: bool,
    pub view: Option<&'a NetworkView>,
    pub scores: &'a ScoreMatrix,
    pub notice: Option<&'a str>,
    pub preview_rows: usize,
}

pub fn render_dashboard(page: &DashboardPage<'_>) -> String {
    let date = Local::now().format("%A, %B %d, %Y");
    let genes_escaped = escape_html(page.genes_input);

    let results_html = match page.view {
        Some(view) => render_resources(view, page.genes_input, page.preview_rows),
        None if page.run => {
            r#"<div class="notice">Enter at least one gene symbol to run the network analysis.</div>"#
                .to_string()
        }
        None => String::new(),
    };

    let notice_html = page
        .notice
        .map(|n| format!(r#"<div class="warning">{}</div>"#, escape_html(n)))
        .unwrap_or_default();

    format!(r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Gene Network Dashboard</title>
    <style>{style}</style>
</head>
<body>
<div class="layout">
<aside class="sidebar">
    <h3>Enter Gene Symbols</h3>
    <form method="get" action="/">
        <label for="genes">Gene list (comma-separated):</label>
        <textarea id="genes" name="genes">{genes}</textarea>
        <p><button class="btn" type="submit" name="run" value="1">Run Network Analysis</button></p>
    </form>
</aside>
<main class="main-content">
    <h1>Gene Network Tools Dashboard</h1>
    <p><strong>Date:</strong> {date}</p>
    <div class="notice">
        This dashboard brings together gene interaction networks, functional association
        evidence and network visualizations for a list of genes of interest. It links out to
        GeneMANIA, STRING, GIANT, Cytoscape + ClueGO, NetworkX and Pathway Commons, and
        scores each tool against a common set of criteria.
    </div>
    {notice}
    {results}
    <hr>
    {evaluation}
</main>
</div>
</body>
</html>"#,
        style = PAGE_STYLE,
        genes = genes_escaped,
        date = date,
        notice = notice_html,
        results = results_html,
        evaluation = render_evaluation(page.scores, page.genes_input, page.run),
    )
}

fn render_resources(view: &NetworkView, genes_input: &str, preview_rows: usize) -> String {
    format!(
        "{}{}{}{}{}{}",
        render_genemania(&view.genes),
        render_string(view, genes_input, preview_rows),
        render_giant(&view.genes),
        render_cytoscape(),
        render_networkx(),
        render_pathway_commons(&view.genes),
    )
}

/// `<li>` per gene, linking when the URL can be built.
fn gene_links(genes: &[GeneSymbol], site: &str, url_for: fn(&GeneSymbol) -> genenet_common::Result<String>) -> String {
    genes
        .iter()
        .map(|g| {
            let name = escape_html(g.as_str());
            match url_for(g) {
                Ok(url) => format!(
                    r#"<li><a href="{}" target="_blank" rel="noopener">{} on {}</a></li>"#,
                    escape_html(&url), name, site
                ),
                Err(e) => {
                    warn!(gene = g.as_str(), error = %e, "Could not build link");
                    format!("<li>{}</li>", name)
                }
            }
        })
        .collect()
}

fn render_genemania(genes: &[GeneSymbol]) -> String {
    format!(r#"
    <section class="card" id="genemania">
        <h2>1. GeneMANIA (Web Tool)</h2>
        <p>Finds functionally associated genes from co-expression, physical interaction,
        pathway and co-localization data.<br>
        <strong>API/Automation:</strong> mostly web-only; programmatic network retrieval is limited.</p>
        <p><strong>Explore networks for each gene individually:</strong></p>
        <ul>{}</ul>
        <div class="notice">Open any gene link above to explore its predicted functional network interactively on GeneMANIA.</div>
    </section>"#,
        gene_links(genes, "GeneMANIA", genemania_url))
}

fn render_string(view: &NetworkView, genes_input: &str, preview_rows: usize) -> String {
    let warning_html = view
        .warning
        .as_deref()
        .map(|w| format!(r#"<div class="warning">{}</div>"#, escape_html(w)))
        .unwrap_or_default();

    let body = if view.is_empty() {
        r#"<div class="notice">No STRING network returned for given genes.</div>"#.to_string()
    } else {
        let rows: String = view
            .edges
            .iter()
            .take(preview_rows)
            .map(|e| format!(
                "<tr><td>{}</td><td>{}</td><td>{:.3}</td></tr>",
                escape_html(&e.source), escape_html(&e.target), e.score
            ))
            .collect();

        let graph_html = render_network_svg(&view.graph, &view.layout)
            .unwrap_or_else(|| r#"<p class="text-muted">No network edges to display.</p>"#.to_string());

        let online_link = match string_network_url(&view.genes) {
            Ok(url) => format!(
                r#"<p><a href="{}" target="_blank" rel="noopener">View Full STRING Network Online</a></p>"#,
                escape_html(&url)
            ),
            Err(e) => {
                warn!(error = %e, "Could not build STRING network link");
                String::new()
            }
        };

        format!(r#"
        <p><strong>Nodes:</strong> {nodes} &nbsp;&nbsp;&nbsp; <strong>Edges:</strong> {edges}</p>
        <table>
            <thead><tr><th>Protein A</th><th>Protein B</th><th>Score</th></tr></thead>
            <tbody>{rows}</tbody>
        </table>
        <p><strong>Network Visualization:</strong></p>
        <div class="graph">{graph}</div>
        {online}
        <form method="get" action="/download/edges">
            <input type="hidden" name="genes" value="{genes}">
            <button class="btn btn-outline" type="submit">Download STRING Edges for Cytoscape</button>
        </form>"#,
            nodes = view.graph.node_count(),
            edges = view.edges.len(),
            rows = rows,
            graph = graph_html,
            online = online_link,
            genes = escape_html(genes_input),
        )
    };

    format!(r#"
    <section class="card" id="string-db">
        <h2>2. STRING-db (API Integrated)</h2>
        <p>Protein–protein interaction and functional association network with evidence scores.<br>
        <strong>API/Automation:</strong> REST API, supports scripting and visualization.</p>
        {}
        {}
    </section>"#, warning_html, body)
}

fn render_giant(genes: &[GeneSymbol]) -> String {
    format!(r#"
    <section class="card" id="giant">
        <h2>3. GIANT (Global/tissue-specific gene networks, API)</h2>
        <p>GIANT offers API access for network queries, prioritization and tissue-specific networks.<br>
        <strong>API/Automation:</strong> REST API supported.</p>
        <ul>{}</ul>
    </section>"#,
        gene_links(genes, "GIANT API", giant_url))
}

fn render_cytoscape() -> String {
    r#"
    <section class="card" id="cytoscape">
        <h2>4. Cytoscape + ClueGO (Desktop Visualization)</h2>
        <p>Cytoscape provides advanced network visualization and analysis. ClueGO clusters
        functionally grouped GO and pathway terms inside Cytoscape.<br>
        <strong>API/Automation:</strong> via the Cytoscape CyREST API (local).</p>
        <ol>
            <li>Download the interaction edge file from the STRING panel above.</li>
            <li>Import it into Cytoscape.</li>
            <li>Install the ClueGO app for pathway enrichment and clustering.</li>
            <li>Use CyREST scripting for automation.</li>
        </ol>
    </section>"#
        .to_string()
}

fn render_networkx() -> String {
    format!(r#"
    <section class="card" id="networkx">
        <h2>5. NetworkX (Python Package)</h2>
        <p>Python library for custom network construction, analysis and visualization.<br>
        <strong>API/Automation:</strong> scripting library only.</p>
        <p><a href="{}" target="_blank" rel="noopener">NetworkX Documentation</a></p>
    </section>"#, NETWORKX_DOCS_URL)
}

fn render_pathway_commons(genes: &[GeneSymbol]) -> String {
    let link = match pathway_commons_url(genes) {
        Ok(url) => format!(
            r#"<p><a href="{}" target="_blank" rel="noopener">Pathway Commons Search</a></p>"#,
            escape_html(&url)
        ),
        Err(e) => {
            warn!(error = %e, "Could not build Pathway Commons link");
            String::new()
        }
    };
    format!(r#"
    <section class="card" id="pathway-commons">
        <h2>6. Pathway Commons (Web Tool)</h2>
        <p>Integrated resource aggregating pathway data with API access.<br>
        <strong>API/Automation:</strong> web REST API, batch mode.</p>
        {}
    </section>"#, link)
}

fn render_evaluation(scores: &ScoreMatrix, genes_input: &str, run: bool) -> String {
    let genes = escape_html(genes_input);
    let run_field = if run { r#"<input type="hidden" name="run" value="1">"# } else { "" };

    let editors: String = scores
        .rows()
        .iter()
        .map(|row| {
            let sliders: String = scores
                .criteria()
                .iter()
                .zip(row.scores.iter())
                .map(|(criterion, value)| {
                    format!(r#"
                <form method="post" action="/evaluation" class="slider-row">
                    <input type="hidden" name="tool" value="{tool}">
                    <input type="hidden" name="criterion" value="{crit}">
                    <input type="hidden" name="genes" value="{genes}">
                    {run}
                    <label title="{help}">{crit}</label>
                    <input type="range" name="value" min="{min}" max="{max}" step="1" value="{value}"
                           title="{help}" onchange="this.form.submit()">
                    <span>{value}</span>
                    <noscript><button class="btn btn-outline" type="submit">Set</button></noscript>
                </form>"#,
                        tool = escape_html(&row.tool),
                        crit = escape_html(criterion.name),
                        help = escape_html(criterion.description),
                        genes = genes,
                        run = run_field,
                        min = MIN_SCORE,
                        max = MAX_SCORE,
                        value = value,
                    )
                })
                .collect();
            format!(
                "<details><summary>Adjust scores for {}</summary>{}</details>",
                escape_html(&row.tool),
                sliders
            )
        })
        .collect();

    let header: String = scores
        .criteria()
        .iter()
        .map(|c| format!(r#"<th title="{}">{}</th>"#, escape_html(c.description), escape_html(c.name)))
        .collect();

    let body: String = scores
        .rows()
        .iter()
        .map(|row| {
            let cells: String = row.scores.iter().map(|s| format!("<td>{}</td>", s)).collect();
            format!(
                "<tr><td>{}</td>{}<td><strong>{}</strong></td></tr>",
                escape_html(&row.tool),
                cells,
                row.total()
            )
        })
        .collect();

    format!(r#"
    <section class="card" id="evaluation">
        <h2>Network Tool Performance Evaluation</h2>
        {editors}
        <table>
            <thead><tr><th>Tool</th>{header}<th>{total}</th></tr></thead>
            <tbody>{body}</tbody>
        </table>
        <p>
            <a class="btn btn-outline" href="/download/evaluation">Download Evaluation Scores</a>
        </p>
        <form method="post" action="/evaluation/reset">
            <input type="hidden" name="genes" value="{genes}">
            {run}
            <button class="btn btn-outline" type="submit">Reset to defaults</button>
        </form>
    </section>"#,
        editors = editors,
        header = header,
        total = TOTAL_COLUMN,
        body = body,
        genes = genes,
        run = run_field,
    )
}
