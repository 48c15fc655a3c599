// Dashboard page layout
//
// Each section mirrors one block of the page. Elements with an `id` are
// filled in by the client script from the JSON endpoints.

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootswatch@4.6.2/dist/cosmo/bootstrap.min.css";
const PLOTLY_JS: &str = "https://cdn.plot.ly/plotly-2.27.0.min.js";

fn strong(id: &str) -> String {
    format!(r#"<strong id="{id}" class="text-success font-weight-normal"></strong>"#)
}

fn graph(id: &str) -> String {
    format!(r#"<div id="{id}" class="graph"></div>"#)
}

fn header() -> String {
    r#"<div class="jumbotron">
  <h1 class="text-center">Carbon Footprint</h1>
  <p class="lead text-center">Measure Compute Emissions</p>
</div>"#
        .to_string()
}

fn net_summary() -> String {
    format!(
        r#"<div class="px-3">
  <h2 class="text-center">Across All Experiments</h2>
  <h4 class="float-left">Net Power Consumption : {}</h4>
  <h4 class="float-right">Net Carbon Equivalent : {}</h4>
  <div class="clearfix"></div>
</div>"#,
        strong("net_power_consumption"),
        strong("net_carbon_equivalent")
    )
}

fn experiment_dropdown() -> String {
    r#"<div class="mt-4">
  <h3>Select an Experiment</h3>
  <select id="experiment_id" class="form-control w-50"></select>
  <div id="experiment_error" class="alert alert-danger mt-2 d-none"></div>
</div>"#
        .to_string()
}

fn experiment_details() -> String {
    format!(
        r#"<div class="px-3 mt-4">
  <h3>Infrastructure Hosted at {}</h3>
  <h4 class="float-left">Power Consumption Across All Runs : {}</h4>
  <h4 class="float-right">Last Run Power Consumption : {}</h4>
  <div class="clearfix"></div>
  <h4 class="float-left">Carbon Equivalent Across All Runs : {}</h4>
  <h4 class="float-right">Last Run Carbon Equivalent : {}</h4>
  <div class="clearfix"></div>
</div>"#,
        strong("experiment_infrastructure_location"),
        strong("experiment_power_consumption"),
        strong("last_run_power_consumption"),
        strong("experiment_carbon_equivalent"),
        strong("last_run_carbon_equivalent")
    )
}

fn exemplary_equivalents() -> String {
    let figure = |id: &str, caption: &str| {
        format!(
            r#"<div class="col text-center"><h3>{}</h3><h5>{}</h5></div>"#,
            strong(id),
            caption
        )
    };
    format!(
        r#"<div class="mt-5">
  <h2 class="text-center">Exemplary Equivalents</h2>
  <div class="row">{}{}{}</div>
</div>"#,
        figure("household_fraction", "of weekly American household emissions"),
        figure("car_miles", "driven"),
        figure("tv_time", "of 32-inch LCD TV watched")
    )
}

fn cloud_emissions_comparison() -> String {
    format!(
        r#"<div id="cloud_emissions_comparison_component" class="mt-5 d-none">
  <h2 class="text-center">Emissions Across {} Regions</h2>
  {}
  <div id="cloud_recommendation" class="text-center"></div>
</div>"#,
        strong("cloud_provider_name"),
        graph("cloud_emissions_barchart")
    )
}

fn global_comparison() -> String {
    let options: String = crate::domain::choropleth::EnergyType::ALL
        .iter()
        .map(|t| format!(r#"<option value="{}">{}</option>"#, t.key(), t.label()))
        .collect();
    format!(
        r##"<div class="mt-5">
  <h2 class="text-center">Global Benchmarks</h2>
  <ul class="nav nav-tabs" role="tablist">
    <li class="nav-item"><a class="nav-link active" data-tab="global_emissions" href="#">Emissions Equivalent</a></li>
    <li class="nav-item"><a class="nav-link" data-tab="global_energy_mix" href="#">Energy Mix</a></li>
  </ul>
  <div id="global_emissions" class="tab-pane">{}</div>
  <div id="global_energy_mix" class="tab-pane d-none">
    <h4 class="mt-3">Select Energy Source</h4>
    <select id="energy_type" class="form-control w-25">{}</select>
    {}
  </div>
</div>"##,
        graph("global_emissions_choropleth"),
        options,
        graph("global_energy_mix_choropleth")
    )
}

fn regional_emissions_comparison() -> String {
    format!(
        r#"<div id="regional_emissions_comparison_component" class="mt-5 d-none">
  <h2 class="text-center">Emissions Across Regions in {}</h2>
  {}
</div>"#,
        strong("country_name"),
        graph("regional_emissions_comparison_choropleth")
    )
}

fn experiment_time_series() -> String {
    format!(
        r#"<div class="mt-5"><h2 class="text-center">Emissions Timeline</h2>{}</div>"#,
        graph("experiment_time_series")
    )
}

fn experiment_emissions_bar_chart() -> String {
    format!(
        r#"<div class="mt-5"><h2 class="text-center">Emissions Detail</h2>{}</div>"#,
        graph("experiment_emissions_bar_chart")
    )
}

fn references() -> String {
    r#"<div class="my-5">
  <h2>References</h2>
  <ul>
    <li><a href="https://arxiv.org/pdf/1911.08354.pdf">Energy Usage Reports: Environmental awareness as part of algorithmic accountability</a></li>
    <li><a href="https://arxiv.org/pdf/1910.09700.pdf">Quantifying the Carbon Emissions of Machine Learning</a></li>
  </ul>
</div>"#
        .to_string()
}

pub fn render_page() -> String {
    let sections = [
        header(),
        net_summary(),
        experiment_dropdown(),
        experiment_details(),
        exemplary_equivalents(),
        cloud_emissions_comparison(),
        global_comparison(),
        regional_emissions_comparison(),
        experiment_time_series(),
        experiment_emissions_bar_chart(),
        references(),
    ];

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Carbon Footprint</title>
<link rel="stylesheet" href="{BOOTSTRAP_CSS}">
<script src="{PLOTLY_JS}"></script>
</head>
<body>
<div class="container" style="padding-top: 50px">
{}
</div>
<script src="/assets/dashboard.js"></script>
</body>
</html>"#,
        sections.join("\n")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_has_every_bound_element() {
        let page = render_page();
        for id in [
            "net_power_consumption",
            "net_carbon_equivalent",
            "experiment_id",
            "experiment_infrastructure_location",
            "experiment_power_consumption",
            "experiment_carbon_equivalent",
            "last_run_power_consumption",
            "last_run_carbon_equivalent",
            "household_fraction",
            "car_miles",
            "tv_time",
            "cloud_emissions_comparison_component",
            "cloud_provider_name",
            "cloud_emissions_barchart",
            "cloud_recommendation",
            "global_emissions_choropleth",
            "global_energy_mix_choropleth",
            "energy_type",
            "regional_emissions_comparison_component",
            "country_name",
            "regional_emissions_comparison_choropleth",
            "experiment_time_series",
            "experiment_emissions_bar_chart",
        ] {
            assert!(page.contains(&format!(r#"id="{}""#, id)), "missing {}", id);
        }
    }

    #[test]
    fn test_energy_type_options() {
        let page = render_page();
        assert!(page.contains(r#"<option value="natural_gas">Natural Gas</option>"#));
        assert!(page.contains(r#"<option value="low_carbon">Low Carbon</option>"#));
    }
}
