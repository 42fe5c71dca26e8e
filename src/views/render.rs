//! HTML rendering of view snapshots
//!
//! Templates are compiled into the binary and registered once; names end in
//! `.html` so tera autoescapes every interpolated value.

use crate::core::error::CatalogResult;
use crate::views::detail::DetailSnapshot;
use crate::views::list::ListSnapshot;
use tera::{Context, Tera};

const BASE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{% block title %}Beers{% endblock title %}</title>
  <link rel="stylesheet" href="/data/css/beers.css">
</head>
<body>
{% block content %}{% endblock content %}
</body>
</html>
"#;

const LIST_TEMPLATE: &str = r#"{% extends "base.html" %}
{% block title %}Beer list{% endblock title %}
{% block content %}
<div class="container">
  <div class="row">
    <form class="col-md-3" method="get" action="/">
      <div class="form-group">
        <label for="search">Search</label>
        <input type="text" class="form-control" id="search" name="q" value="{{ list.pattern }}" placeholder="Enter search">
      </div>
      <div>Current search: {{ list.pattern }}</div>
      <label for="sort">Sort by</label>
      <select id="sort" name="sort" class="form-select">
        {% for criterion in list.criteria %}
        <option value="{{ criterion.key }}"{% if criterion.key == list.criterion.key %} selected{% endif %}>{{ criterion.label }}</option>
        {% endfor %}
      </select>
      <label for="descending">Descending sort</label>
      <input id="descending" name="desc" type="checkbox" class="form-check-input"{% if list.descending %} checked{% endif %}>
      <button type="submit" class="btn btn-primary">Apply</button>
    </form>
    <div class="col-md-9">
      <ul class="container beers">
        {% for beer in list.beers %}
        <li>
          <div class="container clearfix beer" id="{{ beer.id }}">
            <a href="{{ beer.detail_url }}">
              <img class="float-end img" src="{{ beer.image_url }}">
              <h2 class="name">{{ beer.name }}</h2>
              <p class="description">{{ beer.description }}</p>
              <p class="float-end alcohol">Alcohol content: {{ beer.alcohol_content }}%</p>
            </a>
          </div>
        </li>
        {% endfor %}
      </ul>
      <div class="container">
        <div>Number of beers in list: <span class="count">{{ list.matching_count }}</span></div>
      </div>
    </div>
  </div>
</div>
{% endblock content %}
"#;

const DETAIL_TEMPLATE: &str = r#"{% extends "base.html" %}
{% block title %}{% if beer %}{{ beer.name }}{% else %}Beer{% endif %}{% endblock title %}
{% block content %}
{% if beer %}
<div id="{{ beer.id }}" class="detail clearfix">
  <a href="/"><img class="pull-right back" src="/data/img/back.png"></a>
  <h1 class="name">{{ beer.name }}</h1>
  <img class="pull-right img" src="{{ beer.current_image_url }}">
  <p class="description">{{ beer.description }}</p>
  <ul class="beer-thumbs">
    <li><a href="?image=main"><img src="{{ beer.main_image_url }}"></a></li>
    {% if beer.secondary_image_url %}
    <li><a href="?image=secondary"><img src="{{ beer.secondary_image_url }}"></a></li>
    {% endif %}
  </ul>
  <ul class="specs">
    <li><dl><dt>Alcohol content</dt><dd>{{ beer.alcohol_content }} %</dd></dl></li>
    <li><dl><dt>Brewery</dt><dd>{{ beer.brewery | default(value="") }}</dd></dl></li>
    <li><dl><dt>Availability</dt><dd>{{ beer.availability | default(value="") }}</dd></dl></li>
    <li><dl><dt>Style</dt><dd>{{ beer.style | default(value="") }}</dd></dl></li>
    <li><dl><dt>Serving instructions</dt><dd>{{ beer.serving_notes | default(value="") }}</dd></dl></li>
  </ul>
</div>
{% else %}
<div class="detail clearfix">
  <a href="/"><img class="pull-right back" src="/data/img/back.png"></a>
</div>
{% endif %}
{% endblock content %}
"#;

/// Turns view snapshots into HTML pages
#[derive(Debug, Clone)]
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    pub fn new() -> CatalogResult<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("base.html", BASE_TEMPLATE),
            ("list.html", LIST_TEMPLATE),
            ("detail.html", DETAIL_TEMPLATE),
        ])?;
        tera.set_escape_fn(escape_html);
        Ok(Self { tera })
    }

    pub fn render_list(&self, list: &ListSnapshot) -> CatalogResult<String> {
        let mut context = Context::new();
        context.insert("list", list);
        Ok(self.tera.render("list.html", &context)?)
    }

    /// Render the detail page; `None` draws the empty page
    pub fn render_detail(&self, beer: Option<&DetailSnapshot>) -> CatalogResult<String> {
        let mut context = Context::new();
        context.insert("beer", &beer);
        Ok(self.tera.render("detail.html", &context)?)
    }
}

/// Escape text and attribute values, leaving `/` alone so URLs stay readable
fn escape_html(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#x27;"),
            _ => output.push(c),
        }
    }
    output
}
