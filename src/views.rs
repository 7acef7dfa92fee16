//! HTML rendering. Pure string-producing functions; handlers wrap the result
//! in `axum::response::Html`.

use crate::external::quote_provider::StockQuote;
use crate::models::{Portfolio, PortfolioName};

const NAV: &str = r#"<p><a href="/">Home</a> | <a href="/portfolios">Portfolios</a> | <a href="/insertPortfolio">Add portfolio</a></p>"#;

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>{}</title></head>\n<body>\n{}\n{}\n</body>\n</html>",
        escape(title),
        NAV,
        body
    )
}

pub fn home_page(names: &[PortfolioName]) -> String {
    let mut body = String::from("<h1>Stock Portfolio Manager</h1>\n<h2>Portfolios</h2>\n<ul>");
    for item in names {
        body.push_str(&format!("<li>{}</li>", escape(&item.name)));
    }
    body.push_str("</ul>\n");
    body.push_str(
        r#"<form method="post" action="/getPrices">
<label>Portfolio name: <input name="names"></label>
<input type="submit" value="Get prices">
</form>
<form method="post" action="/removePortfolio">
<label>Portfolio name: <input name="name"></label>
<input type="submit" value="Remove portfolio">
</form>"#,
    );
    page("Stock Portfolio Manager", &body)
}

pub fn portfolios_table(portfolios: &[Portfolio]) -> String {
    let mut table = String::from("<table border=\"1\"><tr><th>Name</th><th>Tickers</th></tr>");
    for portfolio in portfolios {
        table.push_str(&format!(
            "<tr><td>{}</td><td>{}</td></tr>",
            escape(&portfolio.name),
            escape(&portfolio.tickers.join(", "))
        ));
    }
    table.push_str("</table>");
    table
}

pub fn portfolios_page(portfolios: &[Portfolio]) -> String {
    let body = format!("<h1>All Portfolios</h1>\n{}", portfolios_table(portfolios));
    page("All Portfolios", &body)
}

pub fn insert_form_page() -> String {
    let body = r#"<h1>Add Portfolio</h1>
<form method="post" action="/processPortfolio">
<p><label>Name: <input name="name"></label></p>
<p><label>Tickers (comma separated): <input name="tickers"></label></p>
<input type="submit" value="Create">
</form>"#;
    page("Add Portfolio", body)
}

/// One row per requested ticker, paired to the provider result by symbol
/// (case-insensitive). Tickers the provider did not return render as
/// "no price found".
pub fn quote_table(tickers: &[String], quotes: &[StockQuote]) -> String {
    if quotes.is_empty() {
        return format!(
            "<p>No stock prices found for: <br><em>{}</em></p>",
            escape(&tickers.join(", "))
        );
    }

    let mut table =
        String::from("<table border=\"1\"><tr><th>Ticker</th><th>Name</th><th>Price</th></tr>");
    for ticker in tickers {
        let quote = quotes
            .iter()
            .find(|quote| quote.symbol.eq_ignore_ascii_case(ticker));
        let name = quote.and_then(|quote| quote.short_name.as_deref()).unwrap_or("");
        let price = match quote.and_then(|quote| quote.price) {
            Some(price) => format!("${}", price),
            None => "no price found".to_string(),
        };
        table.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(ticker),
            escape(name),
            price
        ));
    }
    table.push_str("</table>");
    table
}

pub fn process_result_page(name: &str, tickers: &[String], quote_table_html: &str) -> String {
    let body = format!(
        "<h1>Portfolio Created</h1>\n<p>Saved <strong>{}</strong> with tickers: {}</p>\n{}",
        escape(name),
        escape(&tickers.join(", ")),
        quote_table_html
    );
    page("Portfolio Created", &body)
}

pub fn removed_page(name: &str) -> String {
    let body = format!(
        "<h1>Portfolio Removed</h1>\n<p>Removed portfolio <strong>{}</strong>.</p>",
        escape(name)
    );
    page("Portfolio Removed", &body)
}

pub fn removed_all_page(count: u64) -> String {
    let body = format!(
        "<h1>Portfolios Removed</h1>\n<p>Removed {} portfolio(s).</p>",
        count
    );
    page("Portfolios Removed", &body)
}

pub fn prices_page(name: &str, quote_table_html: &str) -> String {
    let body = format!("<h1>Prices for {}</h1>\n{}", escape(name), quote_table_html);
    page("Prices", &body)
}
