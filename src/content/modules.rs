// src/content/modules.rs
// PrestaShop module development: layout, hooks, configuration pages and
// install-time SQL.

use crate::registry::ContentSource;

pub const SOURCE: ContentSource = ContentSource::new(
    "modules",
    &[
        ("modulo-estructura", ESTRUCTURA),
        ("modulo-hooks", HOOKS),
        ("modulo-configuracion", CONFIGURACION),
        ("modulo-instalacion-sql", INSTALACION_SQL),
    ],
);

const ESTRUCTURA: &str = r#"<article class="lesson">
  <h1>Estructura de un módulo</h1>
  <p>
    Un módulo vive en <code>modules/&lt;nombre&gt;/</code> y su clase
    principal tiene el mismo nombre que la carpeta.
  </p>
  <pre><code>modules/mimodulo/
├── mimodulo.php
├── config.xml
├── logo.png
├── controllers/
├── translations/
└── views/
    ├── css/
    ├── js/
    └── templates/</code></pre>
  <pre><code class="language-php">class MiModulo extends Module
{
    public function __construct()
    {
        $this-&gt;name = 'mimodulo';
        $this-&gt;tab = 'front_office_features';
        $this-&gt;version = '1.0.0';
        $this-&gt;author = 'Curso PrestaShop';
        $this-&gt;bootstrap = true;
        parent::__construct();

        $this-&gt;displayName = $this-&gt;l('Mi módulo');
        $this-&gt;ps_versions_compliancy = ['min' =&gt; '8.0.0', 'max' =&gt; _PS_VERSION_];
    }
}</code></pre>
  <p>
    Guía oficial: <a href="https://devdocs.prestashop-project.org/8/modules/creation/">crear un módulo</a>.
  </p>
</article>"#;

const HOOKS: &str = r#"<article class="lesson">
  <h1>Hooks: engancharse al núcleo</h1>
  <p>
    Los hooks son puntos de extensión. Un módulo se registra en
    <code>install()</code> y después implementa un método
    <code>hook&lt;Nombre&gt;</code>.
  </p>
  <pre><code class="language-php">public function install()
{
    return parent::install()
        &amp;&amp; $this-&gt;registerHook('displayHeader')
        &amp;&amp; $this-&gt;registerHook('actionProductUpdate');
}

public function hookDisplayHeader($params)
{
    $this-&gt;context-&gt;controller-&gt;registerStylesheet(
        'mimodulo-style',
        'modules/' . $this-&gt;name . '/views/css/front.css'
    );
}</code></pre>
  <h2>Tipos de hook</h2>
  <ul>
    <li><strong>display</strong>: devuelven HTML que se pinta en la página.</li>
    <li><strong>action</strong>: reaccionan a un evento y no devuelven nada.</li>
  </ul>
  <p>
    Lista completa en <a href="https://devdocs.prestashop-project.org/8/modules/concepts/hooks/list-of-hooks/">la referencia de hooks</a>.
    Repasa antes la <a href="/curso/modulo-estructura">estructura del módulo</a>.
  </p>
</article>"#;

const CONFIGURACION: &str = r#"<article class="lesson">
  <h1>Página de configuración</h1>
  <p>
    El método <code>getContent()</code> dibuja la página de ajustes del
    módulo en el back office. Los valores se guardan con la clase
    <code>Configuration</code>.
  </p>
  <pre><code class="language-php">public function getContent()
{
    $output = '';
    if (Tools::isSubmit('submit' . $this-&gt;name)) {
        $mensaje = Tools::getValue('MIMODULO_MENSAJE');
        Configuration::updateValue('MIMODULO_MENSAJE', $mensaje);
        $output .= $this-&gt;displayConfirmation($this-&gt;l('Guardado'));
    }

    return $output . $this-&gt;renderForm();
}</code></pre>
  <p>
    Para el formulario usa <code>HelperForm</code>: respeta el estilo del
    back office y valida los campos por ti.
  </p>
  <p>
    Más en <a href="https://devdocs.prestashop-project.org/8/modules/creation/adding-configuration-page/">añadir una página de configuración</a>.
  </p>
</article>"#;

const INSTALACION_SQL: &str = r#"<article class="lesson">
  <h1>Tablas propias al instalar</h1>
  <p>
    Si el módulo necesita guardar datos, crea sus tablas en
    <code>install()</code> y bórralas en <code>uninstall()</code>.
  </p>
  <pre><code class="language-php">public function install()
{
    $sql = 'CREATE TABLE IF NOT EXISTS `' . _DB_PREFIX_ . 'mimodulo_visita` (
        `id_visita` INT UNSIGNED NOT NULL AUTO_INCREMENT,
        `id_product` INT UNSIGNED NOT NULL,
        `fecha` DATETIME NOT NULL,
        PRIMARY KEY (`id_visita`)
    ) ENGINE=' . _MYSQL_ENGINE_ . ' DEFAULT CHARSET=utf8mb4;';

    return parent::install() &amp;&amp; Db::getInstance()-&gt;execute($sql);
}

public function uninstall()
{
    return Db::getInstance()-&gt;execute(
        'DROP TABLE IF EXISTS `' . _DB_PREFIX_ . 'mimodulo_visita`'
    ) &amp;&amp; parent::uninstall();
}</code></pre>
  <p>
    Repasa los <a href="/curso/sql-indices">índices</a> antes de diseñar
    tablas que vayan a crecer.
  </p>
</article>"#;
